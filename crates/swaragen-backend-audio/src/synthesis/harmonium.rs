//! Additive harmonium voice.
//!
//! The signal chain is fixed: additive oscillator, brick-wall low-pass,
//! ADSR envelope, tremolo, then peak normalization.

use swaragen_spec::VoiceParams;
use tracing::trace;

use super::Voice;
use crate::envelope::AdsrShape;
use crate::error::{AudioError, AudioResult};
use crate::filter::brickwall_lowpass;
use crate::gain::normalize_peak;
use crate::modulation::Tremolo;
use crate::oscillator::{additive, Partial, HARMONIUM_PARTIALS};

/// Default low-pass cutoff in Hz.
pub const DEFAULT_CUTOFF_HZ: f64 = 5000.0;

/// Harmonium voice.
#[derive(Debug, Clone, PartialEq)]
pub struct Harmonium {
    sample_rate: u32,
    partials: Vec<Partial>,
    cutoff_hz: f64,
    envelope: AdsrShape,
    tremolo: Tremolo,
}

impl Harmonium {
    /// Creates a harmonium with the default preset at `sample_rate`.
    pub fn new(sample_rate: u32) -> AudioResult<Self> {
        Self::from_params(&VoiceParams {
            sample_rate,
            ..VoiceParams::default()
        })
    }

    /// Creates a harmonium from document parameters.
    pub fn from_params(params: &VoiceParams) -> AudioResult<Self> {
        if params.sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate {
                rate: params.sample_rate,
            });
        }
        if params.harmonics.is_empty() || params.harmonics.len() != params.amplitudes.len() {
            return Err(AudioError::invalid_param(
                "harmonics",
                format!(
                    "expected matching non-empty harmonics and amplitudes, got {} and {}",
                    params.harmonics.len(),
                    params.amplitudes.len()
                ),
            ));
        }
        if !params.cutoff_hz.is_finite() || params.cutoff_hz <= 0.0 {
            return Err(AudioError::invalid_param(
                "cutoff_hz",
                format!("must be positive, got {}", params.cutoff_hz),
            ));
        }

        let partials = params
            .harmonics
            .iter()
            .zip(&params.amplitudes)
            .map(|(&h, &a)| Partial::new(h, a))
            .collect();

        Ok(Self {
            sample_rate: params.sample_rate,
            partials,
            cutoff_hz: params.cutoff_hz,
            envelope: AdsrShape::from_params(&params.envelope, params.sample_rate),
            tremolo: Tremolo::from_params(&params.lfo, params.sample_rate),
        })
    }

    /// Partials of the oscillator.
    pub fn partials(&self) -> &[Partial] {
        &self.partials
    }

    /// Low-pass cutoff in Hz.
    pub fn cutoff_hz(&self) -> f64 {
        self.cutoff_hz
    }

    /// Runs the chain up to, but not including, normalization.
    fn render(&self, frequency: f64, duration: f64) -> Vec<f64> {
        let tone = additive(frequency, &self.partials, duration, self.sample_rate);
        let filtered = brickwall_lowpass(&tone, self.cutoff_hz, self.sample_rate);
        let shaped = self.envelope.apply(&filtered);
        self.tremolo.apply(&shaped)
    }
}

impl Default for Harmonium {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            partials: HARMONIUM_PARTIALS.to_vec(),
            cutoff_hz: DEFAULT_CUTOFF_HZ,
            envelope: AdsrShape::new(0.1, 0.1, 0.7, 0.3, 44100),
            tremolo: Tremolo::new(5.0, 0.1, 44100),
        }
    }
}

impl Voice for Harmonium {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn generate(&self, frequency: f64, duration: f64) -> AudioResult<Vec<f64>> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(AudioError::InvalidFrequency { freq: frequency });
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(AudioError::InvalidDuration { duration });
        }

        let mut waveform = self.render(frequency, duration);
        let peak = normalize_peak(&mut waveform);
        trace!(frequency, samples = waveform.len(), peak, "rendered harmonium note");

        Ok(waveform)
    }
}
