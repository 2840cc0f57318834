//! Brick-wall low-pass filter in the frequency domain.
//!
//! The whole signal is transformed at once, every bin above the cutoff is
//! zeroed and the result is transformed back. The filter is zero-phase and
//! rings near transients instead of rolling off smoothly.

use rustfft::{num_complex::Complex, FftPlanner};

/// Signed frequency in Hz of every FFT bin for a signal of length `n`.
///
/// Bins `0..=(n - 1) / 2` are non-negative; the remaining bins hold the
/// negative frequencies in ascending order.
pub fn fft_frequencies(n: usize, sample_rate: u32) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }

    let bin_width = 1.0 / (n as f64 * (1.0 / sample_rate as f64));
    let positive = (n - 1) / 2 + 1;
    (0..n)
        .map(|k| {
            if k < positive {
                k as f64 * bin_width
            } else {
                (k as f64 - n as f64) * bin_width
            }
        })
        .collect()
}

/// Removes all spectral content above `cutoff_hz`.
///
/// # Arguments
/// * `signal` - Input samples
/// * `cutoff_hz` - Bins whose absolute frequency exceeds this are zeroed
/// * `sample_rate` - Audio sample rate in Hz
///
/// # Returns
/// The real part of the filtered signal, same length as the input.
pub fn brickwall_lowpass(signal: &[f64], cutoff_hz: f64, sample_rate: u32) -> Vec<f64> {
    let n = signal.len();
    if n == 0 {
        return Vec::new();
    }

    let mut planner = FftPlanner::<f64>::new();
    let forward = planner.plan_fft_forward(n);
    let inverse = planner.plan_fft_inverse(n);

    let mut spectrum: Vec<Complex<f64>> = signal.iter().map(|&s| Complex::new(s, 0.0)).collect();
    forward.process(&mut spectrum);

    for (bin, freq) in spectrum.iter_mut().zip(fft_frequencies(n, sample_rate)) {
        if freq.abs() > cutoff_hz {
            *bin = Complex::new(0.0, 0.0);
        }
    }

    inverse.process(&mut spectrum);

    // rustfft does not normalize the inverse transform.
    let scale = n as f64;
    spectrum.iter().map(|c| c.re / scale).collect()
}
