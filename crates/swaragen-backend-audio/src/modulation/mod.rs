//! LFO modulation.
//!
//! A low frequency sine drives amplitude modulation (tremolo) of a finished
//! note.

pub mod lfo;
pub mod tremolo;


pub use lfo::Lfo;
pub use tremolo::Tremolo;
