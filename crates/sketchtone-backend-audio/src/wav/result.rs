//! WAV file generation result type.

use std::path::Path;

use crate::error::{AudioError, AudioResult};

use super::format::WavFormat;
use super::pcm::{pcm_hash, samples_to_pcm16};
use super::writer::write_wav_to_vec;

/// Encoded mixed track.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes mono 16-bit samples.
    pub fn from_mono(samples: &[i16], sample_rate: u32) -> Self {
        let pcm = samples_to_pcm16(samples);
        let pcm_hash = pcm_hash(&pcm);
        let wav_data = write_wav_to_vec(&WavFormat::mono(sample_rate), &pcm);

        Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        }
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Writes the WAV bytes to `path`.
    ///
    /// # Errors
    /// Returns [`AudioError::Encoding`] with the underlying I/O cause.
    pub fn write_to(&self, path: &Path) -> AudioResult<()> {
        std::fs::write(path, &self.wav_data).map_err(|e| AudioError::encoding(path, e))
    }
}
