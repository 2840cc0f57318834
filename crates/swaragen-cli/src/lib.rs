//! Swaragen CLI library.
//!
//! Parameter loading, logging setup, and the command implementations behind
//! the `swaragen` binary.

pub mod commands;
pub mod input;
pub mod logging;
