//! Swaragen Parameter Library
//!
//! This crate provides the declarative inputs for swaragen sample-set generation:
//! validated tuning values, Hindustani shruti ratio presets, MIDI note names, and
//! the JSON parameter document consumed by the audio backend.
//!
//! # Overview
//!
//! A generation request pins one MIDI note to a reference frequency and picks a
//! tuning strategy:
//!
//! - **Equal temperament** - every semitone is the ratio `2^(1/12)`
//! - **Just intonation** - each chromatic degree is a rational multiple of the octave anchor
//! - **Shruti** - just intonation with the ratio table chosen from the 22 shrutis
//!
//! # Example
//!
//! ```
//! use swaragen_spec::{SampleSetParams, Shruti, TuningParams};
//! use swaragen_spec::validation::validate_params;
//!
//! let params = SampleSetParams::new(60, 261.626)
//!     .with_tuning(TuningParams::shruti(Shruti::DEFAULTS));
//!
//! let result = validate_params(&params);
//! assert!(result.is_ok());
//!
//! let reference = params.tuning_reference().unwrap();
//! assert_eq!(reference.base_midi(), 60);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error codes and validation result types
//! - [`note`]: MIDI note-name conversion
//! - [`params`]: Generation parameter document
//! - [`shruti`]: The 22 shrutis and their ratios
//! - [`tuning`]: Validated tuning reference, note range, and ratio table
//! - [`validation`]: Parameter validation

pub mod error;
pub mod note;
pub mod params;
pub mod shruti;
pub mod tuning;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{BackendError, ErrorCode, SpecError, ValidationError, ValidationResult};
pub use note::{midi_to_note, note_to_midi, pitch_class, NoteError, NOTE_NAMES};
pub use params::{
    EnvelopeParams, LfoParams, RatioValue, SampleSetParams, TuningParams, VoiceParams,
    DEFAULT_NOTE_DURATION_SECONDS,
};
pub use shruti::Shruti;
pub use tuning::{parse_ratio, NoteRange, RatioTable, TuningError, TuningReference, DEGREES};
pub use validation::{validate_for_generate, validate_params};
