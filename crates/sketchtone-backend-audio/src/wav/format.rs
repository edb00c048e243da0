//! Output format of the encoded track.

/// Channels in every encoded track.
pub const CHANNELS: u16 = 1;

/// Bits per sample in every encoded track.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Mono 16-bit PCM at a given sample rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl WavFormat {
    pub fn mono(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Bytes per sample frame.
    pub(crate) const fn block_align(&self) -> u16 {
        CHANNELS * BITS_PER_SAMPLE / 8
    }

    /// Bytes per second of audio.
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate.saturating_mul(u32::from(self.block_align()))
    }
}
