//! Generation parameter document.
//!
//! A [`SampleSetParams`] is the JSON document that drives one sample-set
//! generation run: the tuning reference, the tuning strategy, the key range,
//! and the harmonium voice preset.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, SpecError, ValidationError};
use crate::note::note_to_midi;
use crate::shruti::Shruti;
use crate::tuning::{parse_ratio, NoteRange, RatioTable, TuningError, TuningReference};

/// Length of each rendered note in seconds.
pub const DEFAULT_NOTE_DURATION_SECONDS: f64 = 2.0;

/// Parameters for generating one sample set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SampleSetParams {
    /// Reference MIDI note number (mutually exclusive with `base_note`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_midi: Option<i32>,
    /// Reference note name such as `"C4"` (mutually exclusive with `base_midi`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_note: Option<String>,
    /// Frequency of the reference note in Hz.
    pub base_freq: f64,
    /// Tuning strategy.
    #[serde(default)]
    pub tuning: TuningParams,
    /// Half-open MIDI range `[low, high)` that receives samples.
    #[serde(default = "default_note_range")]
    pub note_range: [i32; 2],
    /// Length of each rendered note in seconds.
    #[serde(default = "default_note_duration")]
    pub note_duration_seconds: f64,
    /// Voice preset.
    #[serde(default)]
    pub voice: VoiceParams,
}

fn default_note_range() -> [i32; 2] {
    [
        NoteRange::DEFAULT.low() as i32,
        NoteRange::DEFAULT.high() as i32,
    ]
}

fn default_note_duration() -> f64 {
    DEFAULT_NOTE_DURATION_SECONDS
}

impl SampleSetParams {
    /// Creates parameters with equal temperament and the default voice.
    pub fn new(base_midi: i32, base_freq: f64) -> Self {
        Self {
            base_midi: Some(base_midi),
            base_note: None,
            base_freq,
            tuning: TuningParams::default(),
            note_range: default_note_range(),
            note_duration_seconds: DEFAULT_NOTE_DURATION_SECONDS,
            voice: VoiceParams::default(),
        }
    }

    /// Creates parameters referenced to a note name instead of a MIDI number.
    pub fn with_base_note(note: impl Into<String>, base_freq: f64) -> Self {
        Self {
            base_midi: None,
            base_note: Some(note.into()),
            ..Self::new(0, base_freq)
        }
    }

    /// Sets the tuning strategy.
    pub fn with_tuning(mut self, tuning: TuningParams) -> Self {
        self.tuning = tuning;
        self
    }

    /// Sets the note range.
    pub fn with_note_range(mut self, low: i32, high: i32) -> Self {
        self.note_range = [low, high];
        self
    }

    /// Sets the note duration in seconds.
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.note_duration_seconds = seconds;
        self
    }

    /// Sets the voice preset.
    pub fn with_voice(mut self, voice: VoiceParams) -> Self {
        self.voice = voice;
        self
    }

    /// Parses parameters from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes parameters to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolves the reference MIDI note from `base_midi` or `base_note`.
    pub fn resolve_base_midi(&self) -> Result<i32, SpecError> {
        match (&self.base_midi, &self.base_note) {
            (Some(midi), None) => Ok(*midi),
            (None, Some(note)) => Ok(note_to_midi(note)? as i32),
            (Some(_), Some(_)) | (None, None) => {
                Err(SpecError::ValidationFailed(vec![ValidationError::with_path(
                    ErrorCode::AmbiguousBaseNote,
                    "exactly one of base_midi or base_note must be set",
                    "base_midi",
                )]))
            }
        }
    }

    /// Builds the validated tuning reference.
    pub fn tuning_reference(&self) -> Result<TuningReference, SpecError> {
        let base_midi = self.resolve_base_midi()?;
        Ok(TuningReference::new(base_midi, self.base_freq)?)
    }

    /// Builds the validated note range.
    pub fn note_range(&self) -> Result<NoteRange, TuningError> {
        NoteRange::new(self.note_range[0], self.note_range[1])
    }

    /// Builds the ratio table, or `None` for equal temperament.
    pub fn ratio_table(&self) -> Result<Option<RatioTable>, TuningError> {
        self.tuning.ratio_table()
    }
}

/// Tuning strategy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TuningParams {
    /// Every semitone is the ratio `2^(1/12)`.
    #[default]
    EqualTemperament,
    /// Explicit ratio table, one entry per chromatic degree.
    JustIntonation {
        /// Ratios as numbers or `"a/b"` strings; the first must be 1.
        ratios: Vec<RatioValue>,
    },
    /// Ratio table picked from the shrutis, one per chromatic degree.
    Shruti {
        /// Shruti symbols in degree order, starting with `"S"`.
        shrutis: Vec<Shruti>,
    },
}

impl TuningParams {
    /// Just intonation from a list of ratio strings.
    pub fn just_intonation<S: AsRef<str>>(ratios: &[S]) -> Self {
        TuningParams::JustIntonation {
            ratios: ratios
                .iter()
                .map(|r| RatioValue::Fraction(r.as_ref().to_string()))
                .collect(),
        }
    }

    /// Shruti tuning from one shruti per degree.
    pub fn shruti(shrutis: [Shruti; 12]) -> Self {
        TuningParams::Shruti {
            shrutis: shrutis.to_vec(),
        }
    }

    /// Builds the ratio table, or `None` for equal temperament.
    pub fn ratio_table(&self) -> Result<Option<RatioTable>, TuningError> {
        match self {
            TuningParams::EqualTemperament => Ok(None),
            TuningParams::JustIntonation { ratios } => {
                let values = ratios
                    .iter()
                    .map(RatioValue::value)
                    .collect::<Result<Vec<_>, _>>()?;
                RatioTable::new(values).map(Some)
            }
            TuningParams::Shruti { shrutis } => RatioTable::from_shrutis(shrutis).map(Some),
        }
    }

    /// Short name used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            TuningParams::EqualTemperament => "equal_temperament",
            TuningParams::JustIntonation { .. } => "just_intonation",
            TuningParams::Shruti { .. } => "shruti",
        }
    }
}

/// A ratio written either as a JSON number or as a fraction string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatioValue {
    /// Plain number, e.g. `1.5`.
    Number(f64),
    /// Fraction or decimal text, e.g. `"3/2"`.
    Fraction(String),
}

impl RatioValue {
    /// Returns the numeric ratio.
    pub fn value(&self) -> Result<f64, TuningError> {
        match self {
            RatioValue::Number(v) => Ok(*v),
            RatioValue::Fraction(text) => parse_ratio(text),
        }
    }
}

/// Harmonium voice preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VoiceParams {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Harmonic multipliers of the fundamental.
    pub harmonics: Vec<f64>,
    /// Amplitude of each harmonic.
    pub amplitudes: Vec<f64>,
    /// Brick-wall low-pass cutoff in Hz.
    pub cutoff_hz: f64,
    /// Amplitude envelope.
    pub envelope: EnvelopeParams,
    /// Tremolo LFO.
    pub lfo: LfoParams,
}

impl Default for VoiceParams {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            harmonics: vec![1.0, 2.0, 3.0, 4.0, 5.0],
            amplitudes: vec![1.0, 0.6, 0.4, 0.3, 0.2],
            cutoff_hz: 5000.0,
            envelope: EnvelopeParams::default(),
            lfo: LfoParams::default(),
        }
    }
}

/// ADSR envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvelopeParams {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Default for EnvelopeParams {
    fn default() -> Self {
        Self {
            attack: 0.1,
            decay: 0.1,
            sustain: 0.7,
            release: 0.3,
        }
    }
}

/// Tremolo LFO.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LfoParams {
    /// Rate in Hz.
    pub rate: f64,
    /// Modulation depth (0.0 to 1.0).
    pub depth: f64,
}

impl Default for LfoParams {
    fn default() -> Self {
        Self {
            rate: 5.0,
            depth: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_json_uses_defaults() {
        let params = SampleSetParams::from_json(r#"{"base_midi": 60, "base_freq": 261.626}"#)
            .unwrap();
        assert_eq!(params, SampleSetParams::new(60, 261.626));
        assert_eq!(params.note_range().unwrap(), NoteRange::DEFAULT);
        assert_eq!(params.ratio_table().unwrap(), None);
    }

    #[test]
    fn test_just_intonation_accepts_numbers_and_fractions() {
        let json = r#"{
            "base_note": "C4",
            "base_freq": 261.626,
            "tuning": {
                "type": "just_intonation",
                "ratios": [1, "256/243", "10/9", "32/27", "5/4", "4/3",
                           "45/32", 1.5, "128/81", "5/3", "16/9", "15/8"]
            }
        }"#;
        let params = SampleSetParams::from_json(json).unwrap();
        let table = params.ratio_table().unwrap().unwrap();
        assert_eq!(table.ratio(1), 256.0 / 243.0);
        assert_eq!(table.ratio(7), 1.5);
        assert_eq!(params.tuning_reference().unwrap().base_midi(), 60);
    }

    #[test]
    fn test_shruti_tuning_from_json() {
        let json = r#"{
            "base_midi": 62,
            "base_freq": 293.66,
            "tuning": {
                "type": "shruti",
                "shrutis": ["S", "r1", "R1", "g1", "G1", "M1", "m1", "P", "d1", "D1", "n1", "N1"]
            }
        }"#;
        let params = SampleSetParams::from_json(json).unwrap();
        let table = params.ratio_table().unwrap().unwrap();
        assert_eq!(table.ratio(4), 1.25);
        assert_eq!(params.tuning.name(), "shruti");
    }

    #[test]
    fn test_partial_voice_override() {
        let json = r#"{
            "base_midi": 60,
            "base_freq": 261.626,
            "voice": { "sample_rate": 22050, "lfo": { "rate": 6.0, "depth": 0.05 } }
        }"#;
        let params = SampleSetParams::from_json(json).unwrap();
        assert_eq!(params.voice.sample_rate, 22050);
        assert_eq!(params.voice.cutoff_hz, 5000.0);
        assert_eq!(params.voice.lfo.rate, 6.0);
        assert_eq!(params.voice.envelope, EnvelopeParams::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let json = r#"{"base_midi": 60, "base_freq": 261.626, "tempo": 120}"#;
        assert!(SampleSetParams::from_json(json).is_err());
    }

    #[test]
    fn test_base_note_and_base_midi_are_exclusive() {
        let mut params = SampleSetParams::new(60, 261.626);
        params.base_note = Some("C4".to_string());
        assert!(matches!(
            params.tuning_reference(),
            Err(SpecError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let params = SampleSetParams::with_base_note("D4", 293.66)
            .with_tuning(TuningParams::shruti(Shruti::DEFAULTS))
            .with_note_range(50, 70)
            .with_duration(1.5);
        let json = params.to_json_pretty().unwrap();
        let parsed = SampleSetParams::from_json(&json).unwrap();
        assert_eq!(parsed, params);
        assert!(json.contains("\"r2\""));
    }
}
