//! Sketchtone Audio Backend
//!
//! Turns freehand strokes into a mixed, playable melody.
//!
//! # Overview
//!
//! Each stroke is handled independently:
//!
//! 1. **Geometry** - path length and sharpness (mean absolute slope change)
//! 2. **Scale** - smooth strokes use a pentatonic scale, jagged ones chromatic
//! 3. **Notes** - evenly spaced points map x to a scale degree and y to an octave
//! 4. **Tones** - each note is a fixed-amplitude sine wave
//!
//! The resulting voices are averaged into one mono track and encoded as a
//! 16-bit PCM WAV.
//!
//! # Determinism
//!
//! Generation has no randomness. The same strokes, mood, and config always
//! produce byte-identical WAV data.
//!
//! # Example
//!
//! ```
//! use sketchtone_backend_audio::generate;
//! use sketchtone_spec::{EngineConfig, Stroke};
//!
//! let strokes = vec![Stroke::from_coords([(0.0, 250.0), (600.0, 250.0)])];
//! let result = generate(&strokes, "serene", &EngineConfig::default()).unwrap();
//!
//! assert_eq!(result.report.voice_count, 1);
//! assert_eq!(&result.wav.wav_data[0..4], b"RIFF");
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point (strokes + mood -> mixed WAV + report)
//! - [`geometry`] - Stroke length and sharpness
//! - [`note`] - Point-to-note mapping and frequency resolution
//! - [`synthesis`] - Sine tone rendering
//! - [`voice`] - Per-stroke melody composition
//! - [`mixer`] - Polyphonic mixing
//! - [`wav`] - Deterministic WAV file writer

pub mod error;
pub mod generate;
pub mod geometry;
pub mod mixer;
pub mod note;
pub mod synthesis;
pub mod voice;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use generate::{
    analyze_strokes, compose_voices, generate, generate_with_mood, GenerateResult, StrokeAnalysis,
    BACKEND_VERSION,
};
pub use voice::{compose_voice, Voice};
pub use wav::WavResult;
