//! WAV decoding helpers for assertions.

use std::io::Cursor;

/// A decoded 16-bit mono buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedWav {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels.
    pub channels: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Samples.
    pub samples: Vec<i16>,
}

impl DecodedWav {
    /// Largest absolute sample value.
    pub fn peak(&self) -> i32 {
        self.samples
            .iter()
            .map(|&s| (s as i32).abs())
            .max()
            .unwrap_or(0)
    }
}

/// Decodes a WAV buffer with `hound`.
pub fn decode(wav_data: &[u8]) -> Result<DecodedWav, hound::Error> {
    let reader = hound::WavReader::new(Cursor::new(wav_data))?;
    let spec = reader.spec();
    let samples = reader
        .into_samples::<i16>()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DecodedWav {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        samples,
    })
}
