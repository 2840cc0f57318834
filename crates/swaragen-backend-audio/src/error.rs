//! Error types for audio backend.

use swaragen_spec::{BackendError, SpecError, TuningError};
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Boxed error from a stage the backend does not own (a voice or a packager).
pub type StageSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during sample-set generation.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Parameters failed validation.
    #[error("invalid parameters: {0}")]
    Params(#[from] SpecError),

    /// Tuning values were rejected.
    #[error("invalid tuning: {0}")]
    Tuning(#[from] TuningError),

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// A frequency stream yielded the same note twice.
    #[error("duplicate sample for MIDI note {midi}")]
    DuplicateNote {
        /// The repeated MIDI note.
        midi: u8,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A pipeline stage failed; the cause is kept as the error source.
    #[error("{stage} failed{}: {source}", midi.map(|m| format!(" for MIDI note {}", m)).unwrap_or_default())]
    Stage {
        /// Stage name, e.g. "synthesize", "encode" or "package".
        stage: &'static str,
        /// Note being processed, if the stage works per note.
        midi: Option<u8>,
        /// Underlying error.
        #[source]
        source: StageSource,
    },
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Wraps a failure of a pipeline stage.
    pub fn stage(
        stage: &'static str,
        midi: Option<u8>,
        source: impl Into<StageSource>,
    ) -> Self {
        Self::Stage {
            stage,
            midi,
            source: source.into(),
        }
    }

    /// Returns the stage name if this is a wrapped stage failure.
    pub fn stage_name(&self) -> Option<&'static str> {
        match self {
            AudioError::Stage { stage, .. } => Some(stage),
            _ => None,
        }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::Params(_) => "AUDIO_001",
            AudioError::Tuning(_) => "AUDIO_002",
            AudioError::InvalidSampleRate { .. } => "AUDIO_003",
            AudioError::InvalidDuration { .. } => "AUDIO_004",
            AudioError::InvalidFrequency { .. } => "AUDIO_005",
            AudioError::InvalidParameter { .. } => "AUDIO_006",
            AudioError::DuplicateNote { .. } => "AUDIO_007",
            AudioError::Io(_) => "AUDIO_008",
            AudioError::Stage { .. } => "AUDIO_009",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_param_helper() {
        let err = AudioError::invalid_param("cutoff_hz", "must be positive");
        assert!(err.to_string().contains("cutoff_hz"));
        assert!(err.to_string().contains("must be positive"));
        assert_eq!(err.code(), "AUDIO_006");
    }

    #[test]
    fn test_stage_keeps_source() {
        let cause = AudioError::InvalidFrequency { freq: -1.0 };
        let err = AudioError::stage("synthesize", Some(61), cause);

        assert_eq!(err.stage_name(), Some("synthesize"));
        assert_eq!(
            err.to_string(),
            "synthesize failed for MIDI note 61: invalid frequency: -1 Hz"
        );

        let source = err.source().expect("stage error should expose its cause");
        let inner = source
            .downcast_ref::<AudioError>()
            .expect("cause should still be an AudioError");
        assert!(matches!(inner, AudioError::InvalidFrequency { .. }));
    }

    #[test]
    fn test_stage_without_note() {
        let err = AudioError::stage("package", None, "disk full");
        assert_eq!(err.to_string(), "package failed: disk full");
        assert_eq!(err.category(), "audio");
    }
}
