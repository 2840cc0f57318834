//! Top-level entry point: parameter document in, sample set out.

use std::time::{Duration, Instant};

use swaragen_spec::{validate_for_generate, NoteRange, SampleSetParams, TuningReference};
use tracing::{info, info_span};

use crate::error::AudioResult;
use crate::frequency::FrequencyStream;
use crate::sample_set::SampleSet;
use crate::synthesis::Harmonium;

/// Result of a generation run.
#[derive(Debug)]
pub struct GenerateResult {
    /// Encoded samples, one per note of the range.
    pub samples: SampleSet,
    /// Tuning strategy that produced the frequencies.
    pub tuning: &'static str,
    /// Tuning reference.
    pub reference: TuningReference,
    /// Rendered note range.
    pub note_range: NoteRange,
    /// Length of every sample in seconds.
    pub note_duration_seconds: f64,
    /// Wall-clock time spent rendering.
    pub elapsed: Duration,
}

/// Validates `params` and renders the harmonium sample set they describe.
///
/// ```no_run
/// use swaragen_backend_audio::generate;
/// use swaragen_spec::SampleSetParams;
///
/// let result = generate(&SampleSetParams::new(60, 261.626)).unwrap();
/// assert_eq!(result.samples.len(), 42);
/// ```
pub fn generate(params: &SampleSetParams) -> AudioResult<GenerateResult> {
    validate_for_generate(params)?;

    let reference = params.tuning_reference()?;
    let note_range = params.note_range()?;
    let ratios = params.ratio_table()?;
    let voice = Harmonium::from_params(&params.voice)?;
    let stream = FrequencyStream::new(reference, note_range, ratios);
    let tuning = params.tuning.name();

    let span = info_span!(
        "generate",
        tuning,
        base_midi = reference.base_midi(),
        base_freq = reference.base_freq()
    );
    let _guard = span.enter();

    let start = Instant::now();
    #[cfg(feature = "parallel")]
    let samples =
        crate::sample_set::build_sample_set_parallel(stream, &voice, params.note_duration_seconds)?;
    #[cfg(not(feature = "parallel"))]
    let samples = crate::sample_set::build_sample_set(stream, &voice, params.note_duration_seconds)?;
    let elapsed = start.elapsed();

    info!(
        notes = samples.len(),
        bytes = samples.total_bytes(),
        elapsed_ms = elapsed.as_millis() as u64,
        "generated sample set"
    );

    Ok(GenerateResult {
        samples,
        tuning,
        reference,
        note_range,
        note_duration_seconds: params.note_duration_seconds,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AudioError;
    use swaragen_spec::{ErrorCode, SpecError, TuningParams};

    #[test]
    fn test_generate_small_range() {
        let params = SampleSetParams::new(60, 261.626)
            .with_note_range(60, 64)
            .with_duration(0.05);
        let result = generate(&params).unwrap();

        assert_eq!(result.tuning, "equal_temperament");
        assert_eq!(result.samples.len(), 4);
        assert_eq!(result.note_range, NoteRange::new(60, 64).unwrap());
        assert!(result.samples.iter().all(|e| e.wav.num_samples == 2205));
    }

    #[test]
    fn test_generate_just_intonation() {
        let params = SampleSetParams::new(60, 261.626)
            .with_tuning(TuningParams::just_intonation(&[
                "1", "256/243", "10/9", "32/27", "5/4", "4/3", "45/32", "3/2", "128/81", "5/3",
                "16/9", "15/8",
            ]))
            .with_note_range(67, 68)
            .with_duration(0.01);
        let result = generate(&params).unwrap();

        assert_eq!(result.tuning, "just_intonation");
        let g4 = result.samples.get(67).unwrap();
        assert!((g4.frequency - 392.439).abs() < 0.01);
    }

    #[test]
    fn test_generate_rejects_invalid_params() {
        let err = generate(&SampleSetParams::new(200, -1.0)).unwrap_err();
        match err {
            AudioError::Params(SpecError::ValidationFailed(errors)) => {
                let codes: Vec<ErrorCode> = errors.iter().map(|e| e.code).collect();
                assert!(codes.contains(&ErrorCode::BaseMidiOutOfRange));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
