//! Machine-readable output types.
//!
//! Every `--json` command prints exactly one of these documents to stdout.

use serde::{Deserialize, Serialize};
use swaragen_spec::{ValidationError, ValidationResult};

/// Manifest written next to a generated sample set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Tuning strategy name.
    pub tuning: String,
    /// Reference MIDI note.
    pub base_midi: u8,
    /// Reference frequency in Hz.
    pub base_freq: f64,
    /// Rendered range `[low, high)`.
    pub note_range: [u8; 2],
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Length of every sample in seconds.
    pub note_duration_seconds: f64,
    /// One record per sample in ascending MIDI order.
    pub samples: Vec<ManifestSample>,
}

/// One sample of a [`Manifest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestSample {
    /// Path relative to the output directory, e.g. `samples/60.wav`.
    pub key: String,
    /// MIDI note number.
    pub midi: u8,
    /// Note name, e.g. `C4`.
    pub note: String,
    /// Frequency in Hz.
    pub frequency_hz: f64,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
    /// Number of samples.
    pub num_samples: usize,
}

/// Output of `generate --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether generation succeeded.
    pub success: bool,
    /// Output directory.
    pub out_dir: String,
    /// Wall-clock rendering time in milliseconds.
    pub duration_ms: u64,
    /// Manifest, when generation succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<Manifest>,
    /// Errors, when it did not.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<JsonError>,
}

/// Output of `validate --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether the document is valid.
    pub success: bool,
    /// Every validation error found.
    pub errors: Vec<JsonError>,
}

/// One row of `frequencies --json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRow {
    /// MIDI note number.
    pub midi: u8,
    /// Note name.
    pub note: String,
    /// Frequency in Hz.
    pub frequency_hz: f64,
}

/// One row of `shrutis --json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShrutiRow {
    /// Symbol, e.g. `r2`.
    pub symbol: String,
    /// Swara name.
    pub swara: String,
    /// Variant name, absent for Sa and Pa.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Chromatic degree above Sa.
    pub degree: usize,
    /// Ratio as `"a/b"`.
    pub fraction: String,
    /// Ratio as a number.
    pub ratio: f64,
    /// Whether this is the default shruti for its degree.
    pub default: bool,
}

/// A diagnostic error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonError {
    /// Error code such as `E024` or `AUDIO_009`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Field path, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates an error without a field path.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }
}

impl From<&ValidationError> for JsonError {
    fn from(error: &ValidationError) -> Self {
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            path: error.path.clone(),
        }
    }
}

/// Converts a validation result into JSON errors.
pub fn validation_errors_to_json(result: &ValidationResult) -> Vec<JsonError> {
    result.errors.iter().map(JsonError::from).collect()
}

/// Prints a document as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
