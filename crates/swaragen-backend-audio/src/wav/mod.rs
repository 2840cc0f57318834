//! Deterministic mono WAV encoding.
//!
//! Every note becomes a 16-bit PCM mono RIFF/WAVE buffer with a fixed 44-byte
//! header and no timestamps, so identical waveforms always encode to
//! identical bytes. The BLAKE3 hash of the PCM payload identifies a sample.

mod format;
mod pcm;
mod result;
mod writer;


pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{samples_to_pcm16, write_wav, write_wav_to_vec, WAV_HEADER_LEN};
