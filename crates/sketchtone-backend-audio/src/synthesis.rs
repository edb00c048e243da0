//! Tone synthesis.
//!
//! Each note is rendered as a fixed-amplitude sine wave and quantized to
//! signed 16-bit samples.

use std::f64::consts::TAU;

use crate::note::NoteEvent;

/// Common trait for sample generators.
pub trait Synthesizer {
    /// Generates `num_samples` samples spanning `duration` seconds.
    ///
    /// Sample `i` is taken at `t = i * duration / num_samples`, so the
    /// endpoint itself is never sampled.
    fn synthesize(&self, num_samples: usize, duration: f64) -> Vec<f64>;
}

/// Fixed-amplitude sine tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineTone {
    /// Frequency in Hz. 0 renders silence.
    pub frequency: f64,
    /// Peak amplitude in 16-bit sample units.
    pub amplitude: f64,
}

impl SineTone {
    /// Creates a new sine tone.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

impl Synthesizer for SineTone {
    fn synthesize(&self, num_samples: usize, duration: f64) -> Vec<f64> {
        if num_samples == 0 {
            return Vec::new();
        }
        let dt = duration / num_samples as f64;

        (0..num_samples)
            .map(|i| {
                let t = i as f64 * dt;
                self.amplitude * (TAU * self.frequency * t).sin()
            })
            .collect()
    }
}

/// Number of samples for a tone of `duration` seconds.
#[inline]
pub fn num_samples(sample_rate: u32, duration: f64) -> usize {
    if duration.is_finite() && duration > 0.0 {
        (sample_rate as f64 * duration).round() as usize
    } else {
        0
    }
}

/// Quantizes a sample to the signed 16-bit range (round to nearest, clamp).
#[inline]
pub fn quantize(sample: f64) -> i16 {
    sample.round().clamp(i16::MIN as f64, i16::MAX as f64) as i16
}

/// Renders a sine tone of the given frequency and duration.
///
/// A frequency of 0 (an unresolved note) yields a buffer of zeros of the
/// same length.
pub fn render_tone(frequency: f64, duration: f64, amplitude: f64, sample_rate: u32) -> Vec<i16> {
    let len = num_samples(sample_rate, duration);
    SineTone::new(frequency, amplitude)
        .synthesize(len, duration)
        .into_iter()
        .map(quantize)
        .collect()
}

/// Renders one note event.
pub fn render_note(note: &NoteEvent, amplitude: f64, sample_rate: u32) -> Vec<i16> {
    render_tone(note.frequency, note.duration, amplitude, sample_rate)
}
