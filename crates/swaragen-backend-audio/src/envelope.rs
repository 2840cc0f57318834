//! ADSR amplitude envelope.
//!
//! The envelope is a precomputed curve of four linear segments sized from the
//! signal length, multiplied into the signal in one pass.

use swaragen_spec::EnvelopeParams;

/// ADSR envelope shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrShape {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
    /// Audio sample rate in Hz.
    pub sample_rate: u32,
}

impl AdsrShape {
    /// Creates an envelope shape.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64, sample_rate: u32) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
            sample_rate,
        }
    }

    /// Creates an envelope shape from document parameters.
    pub fn from_params(params: &EnvelopeParams, sample_rate: u32) -> Self {
        Self::new(
            params.attack,
            params.decay,
            params.sustain,
            params.release,
            sample_rate,
        )
    }

    fn samples(&self, seconds: f64) -> usize {
        (seconds * self.sample_rate as f64) as usize
    }

    /// Builds the envelope curve for a signal of `total` samples.
    ///
    /// When attack, decay and release together cover the whole signal the
    /// sustain segment is empty and the release is cut short.
    pub fn curve(&self, total: usize) -> Vec<f64> {
        let attack = self.samples(self.attack);
        let decay = self.samples(self.decay);
        let release = self.samples(self.release);
        let sustain = total.saturating_sub(attack + decay + release);

        let mut curve = Vec::with_capacity(attack + decay + sustain + release);
        curve.extend(linspace(0.0, 1.0, attack));
        curve.extend(linspace(1.0, self.sustain, decay));
        curve.extend(std::iter::repeat(self.sustain).take(sustain));
        curve.extend(linspace(self.sustain, 0.0, release));
        curve.truncate(total);
        curve
    }

    /// Applies the envelope to `signal`. The output has the same length.
    pub fn apply(&self, signal: &[f64]) -> Vec<f64> {
        signal
            .iter()
            .zip(self.curve(signal.len()))
            .map(|(s, e)| s * e)
            .collect()
    }
}

/// `num` evenly spaced values from `start` to `stop`, both included.
///
/// A single value is `start`.
pub(crate) fn linspace(start: f64, stop: f64, num: usize) -> impl Iterator<Item = f64> {
    let step = if num > 1 {
        (stop - start) / (num - 1) as f64
    } else {
        0.0
    };
    (0..num).map(move |i| {
        if num > 1 && i == num - 1 {
            stop
        } else {
            start + i as f64 * step
        }
    })
}
