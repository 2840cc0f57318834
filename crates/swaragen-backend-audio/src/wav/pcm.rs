//! PCM extraction and hashing.

/// Extracts the PCM payload from a WAV buffer.
///
/// Walks the RIFF chunks until the `data` chunk, so buffers with extra chunks
/// written by other tools are accepted too.
///
/// # Returns
/// PCM data if found, or None if the buffer is not a well-formed WAV file
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 12 {
        return None;
    }
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let size_bytes: [u8; 4] = wav_data[pos + 4..pos + 8].try_into().ok()?;
        let chunk_size = u32::from_le_bytes(size_bytes) as usize;
        let data_start = pos + 8;
        let data_end = data_start.checked_add(chunk_size)?;

        if chunk_id == b"data" {
            return wav_data.get(data_start..data_end);
        }

        // Chunks are padded to an even length.
        pos = data_end + (chunk_size % 2);
    }

    None
}

/// BLAKE3 hash (hex) of the PCM payload of a WAV buffer.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
