//! Error types for parameter validation and processing.

use thiserror::Error;

use crate::note::NoteError;
use crate::tuning::TuningError;

/// Error codes for parameter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Tuning reference errors (E001-E004)
    /// E001: base_midi outside 0..=127
    BaseMidiOutOfRange,
    /// E002: base_freq is zero, negative, or not finite
    NonPositiveBaseFreq,
    /// E003: neither or both of base_midi and base_note were given
    AmbiguousBaseNote,
    /// E004: base_note could not be parsed
    InvalidNoteName,

    // Tuning strategy errors (E010-E011)
    /// E010: note range is empty-inverted or leaves the MIDI range
    InvalidNoteRange,
    /// E011: ratio table is malformed
    InvalidRatioTable,

    // Voice errors (E020-E025)
    /// E020: note duration is not a positive number of seconds
    InvalidDuration,
    /// E021: sample rate outside the supported range
    InvalidSampleRate,
    /// E022: harmonic profile is empty or mismatched
    InvalidHarmonics,
    /// E023: low-pass cutoff is not positive
    InvalidCutoff,
    /// E024: envelope times or sustain level out of range
    InvalidEnvelope,
    /// E025: LFO rate or depth out of range
    InvalidLfo,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::BaseMidiOutOfRange => "E001",
            ErrorCode::NonPositiveBaseFreq => "E002",
            ErrorCode::AmbiguousBaseNote => "E003",
            ErrorCode::InvalidNoteName => "E004",
            ErrorCode::InvalidNoteRange => "E010",
            ErrorCode::InvalidRatioTable => "E011",
            ErrorCode::InvalidDuration => "E020",
            ErrorCode::InvalidSampleRate => "E021",
            ErrorCode::InvalidHarmonics => "E022",
            ErrorCode::InvalidCutoff => "E023",
            ErrorCode::InvalidEnvelope => "E024",
            ErrorCode::InvalidLfo => "E025",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "voice.envelope.sustain").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Top-level error type for parameter operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Parameter validation failed with one or more errors.
    #[error("parameter validation failed with {} error(s)", .0.len())]
    ValidationFailed(Vec<ValidationError>),

    /// Tuning value rejected.
    #[error(transparent)]
    Tuning(#[from] TuningError),

    /// Note name rejected.
    #[error(transparent)]
    Note(#[from] NoteError),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of parameter validation.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if any error carries the given code.
    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<(), SpecError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(SpecError::ValidationFailed(self.errors))
        }
    }
}

/// Common trait for backend errors.
///
/// Backends implement this so the CLI can print a stable code and category
/// next to the message without knowing the concrete error type.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting (e.g., "AUDIO_001").
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}
