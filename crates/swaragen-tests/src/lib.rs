//! Swaragen End-to-End Test Infrastructure
//!
//! This crate holds the integration tests for whole-pipeline behavior:
//!
//! - Generation: parameters -> keyed, decodable WAV buffers
//! - Determinism: byte-identical output across runs
//! - Tuning properties: equal temperament, just intonation, anchors
//! - Signal chain: filter, envelope and normalization edge cases
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p swaragen-tests
//! ```

pub mod determinism;
pub mod fixtures;
pub mod wav_check;
