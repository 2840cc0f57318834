//! Tremolo (amplitude modulation).

use swaragen_spec::LfoParams;

use super::lfo::Lfo;

/// Tremolo effect: multiplies a signal by `1 + depth * lfo(t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tremolo {
    /// Modulation source.
    pub lfo: Lfo,
    /// Modulation depth (0.0 to 1.0).
    pub depth: f64,
}

impl Tremolo {
    /// Creates a tremolo.
    pub fn new(rate: f64, depth: f64, sample_rate: u32) -> Self {
        Self {
            lfo: Lfo::new(rate, sample_rate),
            depth,
        }
    }

    /// Creates a tremolo from document parameters.
    pub fn from_params(params: &LfoParams, sample_rate: u32) -> Self {
        Self::new(params.rate, params.depth, sample_rate)
    }

    /// Applies the tremolo. The output has the same length as `signal`.
    pub fn apply(&self, signal: &[f64]) -> Vec<f64> {
        signal
            .iter()
            .zip(self.lfo.generate(signal.len()))
            .map(|(s, m)| s * (1.0 + self.depth * m))
            .collect()
    }
}
