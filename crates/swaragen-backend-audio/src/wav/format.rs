//! WAV format parameters.

/// Format of an encoded sample: mono, 16-bit PCM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl WavFormat {
    /// Number of channels.
    pub const CHANNELS: u16 = 1;

    /// Bits per sample.
    pub const BITS_PER_SAMPLE: u16 = 16;

    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Bytes per sample frame.
    pub(crate) fn block_align(&self) -> u16 {
        Self::CHANNELS * (Self::BITS_PER_SAMPLE / 8)
    }

    /// Bytes per second, `None` when it does not fit the header field.
    pub(crate) fn byte_rate(&self) -> Option<u32> {
        self.sample_rate.checked_mul(self.block_align() as u32)
    }
}
