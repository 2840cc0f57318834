//! Sine LFO.

use std::f64::consts::PI;

/// Low frequency sine oscillator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lfo {
    /// LFO rate in Hz.
    pub rate: f64,
    /// Audio sample rate in Hz.
    pub sample_rate: u32,
}

impl Lfo {
    /// Creates a new LFO.
    ///
    /// # Arguments
    /// * `rate` - LFO rate in Hz (typically 0.1-20 Hz)
    /// * `sample_rate` - Audio sample rate
    pub fn new(rate: f64, sample_rate: u32) -> Self {
        Self { rate, sample_rate }
    }

    /// Generates a buffer of LFO samples starting at phase zero.
    ///
    /// The times span `[0, num_samples / sample_rate)`, so the last sample
    /// stops one step short of the end.
    ///
    /// # Returns
    /// Vector of LFO values in range [-1.0, 1.0]
    pub fn generate(&self, num_samples: usize) -> Vec<f64> {
        if num_samples == 0 {
            return Vec::new();
        }

        let span = num_samples as f64 / self.sample_rate as f64;
        let step = span / num_samples as f64;
        let omega = 2.0 * PI * self.rate;
        (0..num_samples)
            .map(|i| (omega * (i as f64 * step)).sin())
            .collect()
    }
}
