//! Deterministic WAV file writer.
//!
//! This module writes mono 16-bit PCM WAV files with no timestamps or
//! variable metadata, so identical sample buffers always encode to identical
//! bytes. The hash of the PCM payload identifies a mixed track.

mod format;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use format::{WavFormat, BITS_PER_SAMPLE, CHANNELS};
pub use pcm::{pcm_hash, samples_to_pcm16};
pub use result::WavResult;
pub use writer::{write_wav, write_wav_to_vec};
