//! PCM payload encoding and hashing.

/// Converts 16-bit samples to little-endian PCM bytes.
pub fn samples_to_pcm16(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// BLAKE3 hash of raw PCM bytes, hex-encoded.
///
/// Headers are excluded so the hash identifies the audio itself, whatever
/// sample rate it was tagged with.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}
