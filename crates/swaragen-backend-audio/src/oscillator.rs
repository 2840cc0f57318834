//! Additive oscillator.
//!
//! Builds a timbre by summing sine partials at integer or fractional
//! multiples of a fundamental.

use std::f64::consts::PI;

/// One sine component of an additive tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partial {
    /// Frequency multiplier relative to the fundamental.
    pub harmonic: f64,
    /// Linear amplitude.
    pub amplitude: f64,
}

impl Partial {
    /// Creates a partial.
    pub const fn new(harmonic: f64, amplitude: f64) -> Self {
        Self {
            harmonic,
            amplitude,
        }
    }
}

/// Harmonium partials: harmonics 1 to 5 with falling amplitudes.
pub const HARMONIUM_PARTIALS: [Partial; 5] = [
    Partial::new(1.0, 1.0),
    Partial::new(2.0, 0.6),
    Partial::new(3.0, 0.4),
    Partial::new(4.0, 0.3),
    Partial::new(5.0, 0.2),
];

/// Number of samples covering `duration` seconds, truncated.
pub fn sample_count(duration: f64, sample_rate: u32) -> usize {
    (sample_rate as f64 * duration) as usize
}

/// Generates an additive tone.
///
/// # Arguments
/// * `frequency` - Fundamental frequency in Hz
/// * `partials` - Harmonic/amplitude profile
/// * `duration` - Length in seconds
/// * `sample_rate` - Audio sample rate in Hz
///
/// # Returns
/// `floor(duration * sample_rate)` samples taken at evenly spaced times over
/// `[0, duration)`.
pub fn additive(frequency: f64, partials: &[Partial], duration: f64, sample_rate: u32) -> Vec<f64> {
    let num_samples = sample_count(duration, sample_rate);
    if num_samples == 0 {
        return Vec::new();
    }

    let step = duration / num_samples as f64;
    let omegas: Vec<(f64, f64)> = partials
        .iter()
        .map(|p| (2.0 * PI * (frequency * p.harmonic), p.amplitude))
        .collect();

    (0..num_samples)
        .map(|i| {
            let t = i as f64 * step;
            omegas
                .iter()
                .fold(0.0, |acc, &(omega, amp)| acc + amp * (omega * t).sin())
        })
        .collect()
}
