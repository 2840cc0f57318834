//! Parameter validation.
//!
//! Validation collects every problem with a document instead of stopping at the
//! first, so a caller can report them all at once.

use crate::error::{ErrorCode, SpecError, ValidationError, ValidationResult};
use crate::params::{EnvelopeParams, LfoParams, SampleSetParams, VoiceParams};
use crate::tuning::{TuningError, TuningReference};

/// Lowest supported sample rate in Hz.
pub const MIN_SAMPLE_RATE: u32 = 8000;

/// Highest supported sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Longest supported note duration in seconds.
pub const MAX_NOTE_DURATION_SECONDS: f64 = 60.0;

/// Validates a parameter document.
///
/// # Returns
/// A [`ValidationResult`] listing every error found; empty when the document
/// can be handed to the audio backend.
pub fn validate_params(params: &SampleSetParams) -> ValidationResult {
    let mut result = ValidationResult::success();

    validate_reference(params, &mut result);

    if let Err(e) = params.note_range() {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidNoteRange,
            e.to_string(),
            "note_range",
        ));
    }

    if let Err(e) = params.ratio_table() {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidRatioTable,
            e.to_string(),
            "tuning",
        ));
    }

    let duration = params.note_duration_seconds;
    if !duration.is_finite() || duration <= 0.0 || duration > MAX_NOTE_DURATION_SECONDS {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDuration,
            format!(
                "note duration must be in (0, {}] seconds, got {}",
                MAX_NOTE_DURATION_SECONDS, duration
            ),
            "note_duration_seconds",
        ));
    }

    validate_voice(&params.voice, &mut result);

    result
}

/// Validates a parameter document and converts the result into an error.
pub fn validate_for_generate(params: &SampleSetParams) -> Result<(), SpecError> {
    validate_params(params).into_result()
}

fn validate_reference(params: &SampleSetParams, result: &mut ValidationResult) {
    let base_midi = match params.resolve_base_midi() {
        Ok(midi) => midi,
        Err(SpecError::Note(e)) => {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidNoteName,
                e.to_string(),
                "base_note",
            ));
            return;
        }
        Err(SpecError::ValidationFailed(errors)) => {
            result.errors.extend(errors);
            return;
        }
        Err(e) => {
            result.add_error(ValidationError::with_path(
                ErrorCode::AmbiguousBaseNote,
                e.to_string(),
                "base_midi",
            ));
            return;
        }
    };

    if let Err(e) = TuningReference::new(base_midi, params.base_freq) {
        let code = match e {
            TuningError::BaseMidiOutOfRange { .. } => ErrorCode::BaseMidiOutOfRange,
            _ => ErrorCode::NonPositiveBaseFreq,
        };
        result.add_error(ValidationError::with_path(code, e.to_string(), e.field()));
    }
}

fn validate_voice(voice: &VoiceParams, result: &mut ValidationResult) {
    if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&voice.sample_rate) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSampleRate,
            format!(
                "sample rate must be in [{}, {}] Hz, got {}",
                MIN_SAMPLE_RATE, MAX_SAMPLE_RATE, voice.sample_rate
            ),
            "voice.sample_rate",
        ));
    }

    if voice.harmonics.is_empty() || voice.harmonics.len() != voice.amplitudes.len() {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidHarmonics,
            format!(
                "harmonics and amplitudes must be non-empty and equal length, got {} and {}",
                voice.harmonics.len(),
                voice.amplitudes.len()
            ),
            "voice.harmonics",
        ));
    }
    for (i, &h) in voice.harmonics.iter().enumerate() {
        if !h.is_finite() || h <= 0.0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidHarmonics,
                format!("harmonic must be positive, got {}", h),
                format!("voice.harmonics[{}]", i),
            ));
        }
    }
    for (i, &a) in voice.amplitudes.iter().enumerate() {
        if !a.is_finite() {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidHarmonics,
                format!("amplitude must be finite, got {}", a),
                format!("voice.amplitudes[{}]", i),
            ));
        }
    }

    if !voice.cutoff_hz.is_finite() || voice.cutoff_hz <= 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidCutoff,
            format!("cutoff must be positive, got {}", voice.cutoff_hz),
            "voice.cutoff_hz",
        ));
    }

    validate_envelope(&voice.envelope, result);
    validate_lfo(&voice.lfo, result);
}

fn validate_envelope(envelope: &EnvelopeParams, result: &mut ValidationResult) {
    let times = [
        ("attack", envelope.attack),
        ("decay", envelope.decay),
        ("release", envelope.release),
    ];
    for (name, value) in times {
        if !value.is_finite() || value < 0.0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidEnvelope,
                format!("{} must be non-negative, got {}", name, value),
                format!("voice.envelope.{}", name),
            ));
        }
    }
    if !(0.0..=1.0).contains(&envelope.sustain) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidEnvelope,
            format!("sustain must be in [0, 1], got {}", envelope.sustain),
            "voice.envelope.sustain",
        ));
    }
}

fn validate_lfo(lfo: &LfoParams, result: &mut ValidationResult) {
    if !lfo.rate.is_finite() || lfo.rate < 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidLfo,
            format!("LFO rate must be non-negative, got {}", lfo.rate),
            "voice.lfo.rate",
        ));
    }
    if !(0.0..=1.0).contains(&lfo.depth) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidLfo,
            format!("LFO depth must be in [0, 1], got {}", lfo.depth),
            "voice.lfo.depth",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TuningParams;
    use crate::shruti::Shruti;

    #[test]
    fn test_default_params_are_valid() {
        let params = SampleSetParams::new(60, 261.626);
        let result = validate_params(&params);
        assert!(result.is_ok(), "{:?}", result.errors);
        assert!(validate_for_generate(&params).is_ok());
    }

    #[test]
    fn test_reference_errors_are_distinct() {
        let result = validate_params(&SampleSetParams::new(128, 261.626));
        assert!(result.has_code(ErrorCode::BaseMidiOutOfRange));
        assert!(!result.has_code(ErrorCode::NonPositiveBaseFreq));

        let result = validate_params(&SampleSetParams::new(60, 0.0));
        assert!(result.has_code(ErrorCode::NonPositiveBaseFreq));
        assert_eq!(result.errors[0].path.as_deref(), Some("base_freq"));
    }

    #[test]
    fn test_bad_note_name() {
        let result = validate_params(&SampleSetParams::with_base_note("H2", 100.0));
        assert!(result.has_code(ErrorCode::InvalidNoteName));
    }

    #[test]
    fn test_missing_base_note() {
        let mut params = SampleSetParams::new(60, 261.626);
        params.base_midi = None;
        assert!(validate_params(&params).has_code(ErrorCode::AmbiguousBaseNote));
    }

    #[test]
    fn test_ratio_table_checked() {
        let params = SampleSetParams::new(60, 261.626)
            .with_tuning(TuningParams::just_intonation(&["1", "9/8", "5/4"]));
        assert!(validate_params(&params).has_code(ErrorCode::InvalidRatioTable));

        let mut shrutis = Shruti::DEFAULTS;
        shrutis[0] = Shruti::KomalRishabh;
        let params = SampleSetParams::new(60, 261.626).with_tuning(TuningParams::shruti(shrutis));
        assert!(validate_params(&params).has_code(ErrorCode::InvalidRatioTable));
    }

    #[test]
    fn test_collects_every_voice_error() {
        let mut params = SampleSetParams::new(60, 261.626)
            .with_note_range(90, 48)
            .with_duration(0.0);
        params.voice.sample_rate = 100;
        params.voice.amplitudes.pop();
        params.voice.cutoff_hz = -1.0;
        params.voice.envelope.sustain = 1.5;
        params.voice.lfo.depth = 2.0;

        let result = validate_params(&params);
        for code in [
            ErrorCode::InvalidNoteRange,
            ErrorCode::InvalidDuration,
            ErrorCode::InvalidSampleRate,
            ErrorCode::InvalidHarmonics,
            ErrorCode::InvalidCutoff,
            ErrorCode::InvalidEnvelope,
            ErrorCode::InvalidLfo,
        ] {
            assert!(result.has_code(code), "missing {}", code);
        }
    }
}
