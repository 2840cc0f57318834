//! Instrument voices.
//!
//! A voice turns one frequency into one finished waveform. The sample-set
//! builder only sees the [`Voice`] trait, so another instrument can be
//! dropped in without touching it.
//!
//! - `harmonium` - Additive harmonium: oscillator, brick-wall low-pass, ADSR,
//!   tremolo and peak normalization

pub mod harmonium;

use crate::error::AudioResult;

pub use harmonium::Harmonium;

/// Common trait for all instrument voices.
pub trait Voice {
    /// Audio sample rate of generated waveforms in Hz.
    fn sample_rate(&self) -> u32;

    /// Generates one note.
    ///
    /// # Arguments
    /// * `frequency` - Fundamental frequency in Hz
    /// * `duration` - Note length in seconds
    ///
    /// # Returns
    /// `floor(duration * sample_rate)` samples with peak absolute amplitude
    /// 1.0, or all zeros for a silent note.
    fn generate(&self, frequency: f64, duration: f64) -> AudioResult<Vec<f64>>;
}

impl<V: Voice + ?Sized> Voice for &V {
    fn sample_rate(&self) -> u32 {
        (**self).sample_rate()
    }

    fn generate(&self, frequency: f64, duration: f64) -> AudioResult<Vec<f64>> {
        (**self).generate(frequency, duration)
    }
}

impl<V: Voice + ?Sized> Voice for Box<V> {
    fn sample_rate(&self) -> u32 {
        (**self).sample_rate()
    }

    fn generate(&self, frequency: f64, duration: f64) -> AudioResult<Vec<f64>> {
        (**self).generate(frequency, duration)
    }
}
