//! Swaragen Audio Backend
//!
//! This crate renders tuning-aware harmonium sample sets: one synthesized,
//! normalized, 16-bit mono WAV buffer per MIDI note of a key range.
//!
//! # Overview
//!
//! Generation runs in three layers:
//!
//! - **Frequency stream** - yields `(midi, Hz)` pairs under equal temperament
//!   or just intonation, anchored on a reference note
//! - **Synthesis chain** - additive oscillator, brick-wall low-pass, ADSR
//!   envelope, tremolo and peak normalization behind the [`Voice`] trait
//! - **Sample-set builder** - renders and encodes every note and keys the
//!   buffers as `samples/{midi}.wav` for a downstream [`SamplePackager`]
//!
//! # Determinism
//!
//! Nothing in the chain is random. The same parameters produce byte-identical
//! WAV buffers across runs on the same platform, and the BLAKE3 hash of each
//! PCM payload is reported with the sample.
//!
//! # Example
//!
//! ```no_run
//! use swaragen_backend_audio::generate;
//! use swaragen_spec::SampleSetParams;
//!
//! let params = SampleSetParams::new(60, 261.626);
//! let result = generate(&params)?;
//!
//! for entry in &result.samples {
//!     std::fs::write(format!("{}.wav", entry.key.midi()), &entry.wav.wav_data)?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point: parameter document in, sample set out
//! - [`frequency`] - Equal-temperament and just-intonation frequency streams
//! - [`oscillator`] - Additive oscillator
//! - [`filter`] - Brick-wall FFT low-pass
//! - [`envelope`] - ADSR envelope
//! - [`modulation`] - LFO tremolo
//! - [`gain`] - Peak normalization
//! - [`synthesis`] - The [`Voice`] trait and the harmonium voice
//! - [`sample_set`] - Sample-set builder and packaging hand-off
//! - [`wav`] - Deterministic WAV writer

pub mod envelope;
pub mod error;
pub mod filter;
pub mod frequency;
pub mod gain;
pub mod generate;
pub mod modulation;
pub mod oscillator;
pub mod sample_set;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use frequency::{anchor, freq_from_offset, Anchor, FrequencyStream, NotePitch};
pub use generate::{generate, GenerateResult};
#[cfg(feature = "parallel")]
pub use sample_set::build_sample_set_parallel;
pub use sample_set::{
    build_sample_set, package, SampleEntry, SampleKey, SamplePackager, SampleSet,
};
pub use synthesis::{Harmonium, Voice};
pub use wav::WavResult;
