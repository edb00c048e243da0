//! Audio mixer for combining voices.

use crate::error::{AudioError, AudioResult};
use crate::synthesis::quantize;

/// Audio mixer for combining multiple voices into one track.
#[derive(Debug, Default)]
pub struct Mixer {
    /// Accumulated voices.
    voices: Vec<Vec<i16>>,
}

impl Mixer {
    /// Creates an empty mixer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a voice to the mix.
    pub fn add_voice(&mut self, samples: Vec<i16>) {
        self.voices.push(samples);
    }

    /// Number of voices added so far.
    pub fn voice_count(&self) -> usize {
        self.voices.len()
    }

    /// Length of the mixed output (the longest voice).
    pub fn num_samples(&self) -> usize {
        self.voices.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Mixes all voices.
    ///
    /// Shorter voices contribute silence past their end. The sum is divided
    /// by the voice count, then clamped and rounded to 16-bit samples.
    ///
    /// # Errors
    /// Returns [`AudioError::NoValidInput`] when no voice was added.
    pub fn mix(&self) -> AudioResult<Vec<i16>> {
        if self.voices.is_empty() {
            return Err(AudioError::NoValidInput { strokes: 0 });
        }

        let mut accum = vec![0.0_f64; self.num_samples()];
        for voice in &self.voices {
            for (acc, &sample) in accum.iter_mut().zip(voice.iter()) {
                *acc += sample as f64;
            }
        }

        let count = self.voices.len() as f64;
        Ok(accum.into_iter().map(|sum| quantize(sum / count)).collect())
    }
}

/// Mixes a list of voice buffers.
///
/// # Errors
/// Returns [`AudioError::NoValidInput`] when `voices` is empty.
pub fn mix_voices<V: AsRef<[i16]>>(voices: &[V]) -> AudioResult<Vec<i16>> {
    let mut mixer = Mixer::new();
    for voice in voices {
        mixer.add_voice(voice.as_ref().to_vec());
    }
    mixer.mix()
}
