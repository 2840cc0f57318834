//! Peak measurement and normalization.

/// Peak absolute amplitude of a signal; `0.0` for an empty signal.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0_f64, |a, b| a.max(b))
}

/// Scales `samples` in place so the peak absolute amplitude is exactly 1.0.
///
/// A silent (or empty) signal is left untouched.
///
/// # Returns
/// The peak measured before scaling.
pub fn normalize_peak(samples: &mut [f64]) -> f64 {
    let current_peak = peak(samples);

    if current_peak > 0.0 {
        for sample in samples.iter_mut() {
            *sample /= current_peak;
        }
    }

    current_peak
}
