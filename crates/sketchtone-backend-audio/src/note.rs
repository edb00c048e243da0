//! Point-to-note mapping and note frequency resolution.
//!
//! The x coordinate picks a scale degree (left edge = first degree) and the
//! y coordinate picks an octave shift above the mood's base octave (bottom
//! edge = base octave, top quarter = three octaves up).

use serde::Serialize;
use sketchtone_spec::{
    EngineConfig, PitchClass, Point, Scale, MAX_OCTAVE, MAX_OCTAVE_SHIFT, MIN_OCTAVE,
};

/// Octave of the reference frequency table.
pub const REFERENCE_OCTAVE: i32 = 4;

/// Octave assumed when a note string has a malformed octave suffix.
pub const DEFAULT_OCTAVE: i32 = 4;

/// A single note to be synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NoteEvent {
    /// Pitch class (scale degree).
    pub pitch: PitchClass,
    /// Octave number.
    pub octave: i32,
    /// Frequency in Hz.
    pub frequency: f64,
    /// Duration in seconds.
    pub duration: f64,
}

/// Equal-tempered frequency of a pitch class in octave 4 (A4 = 440 Hz).
pub fn reference_frequency(pitch: PitchClass) -> f64 {
    match pitch {
        PitchClass::C => 261.63,
        PitchClass::CSharp => 277.18,
        PitchClass::D => 293.66,
        PitchClass::DSharp => 311.13,
        PitchClass::E => 329.63,
        PitchClass::F => 349.23,
        PitchClass::FSharp => 369.99,
        PitchClass::G => 392.00,
        PitchClass::GSharp => 415.30,
        PitchClass::A => 440.00,
        PitchClass::ASharp => 466.16,
        PitchClass::B => 493.88,
    }
}

/// Frequency of `pitch` in `octave`, doubling per octave above 4.
pub fn frequency(pitch: PitchClass, octave: i32) -> f64 {
    reference_frequency(pitch) * 2.0_f64.powi(octave - REFERENCE_OCTAVE)
}

/// Resolves a pitch class name (case-insensitive) and octave to Hz.
///
/// Unknown names resolve to 0 Hz. Callers treat 0 as "silent note": the tone
/// synthesizer renders it as a flat-line buffer rather than failing.
pub fn resolve_frequency(name: &str, octave: i32) -> f64 {
    match PitchClass::parse(name) {
        Some(pitch) => frequency(pitch, octave),
        None => {
            tracing::warn!(note = name, octave, "unresolved pitch class, rendering silence");
            0.0
        }
    }
}

/// Resolves a note string such as `"c#4"` to Hz.
///
/// The last character is the octave digit; when it is not a digit the octave
/// defaults to 4. Everything before it names the pitch class.
pub fn note_str_to_freq(note: &str) -> f64 {
    let Some((split, last)) = note.char_indices().next_back() else {
        return 0.0;
    };
    let octave = last
        .to_digit(10)
        .map(|d| d as i32)
        .unwrap_or(DEFAULT_OCTAVE);
    resolve_frequency(&note[..split], octave)
}

/// Maps a point to a scale degree and octave.
///
/// Coordinates outside the canvas are clamped to its edges, and the final
/// octave is clamped to the supported range.
pub fn map_point(
    point: &Point,
    config: &EngineConfig,
    scale: Scale,
    base_octave: i32,
) -> (PitchClass, i32) {
    let size = scale.len();

    let norm_x = (point.x / config.canvas_width).clamp(0.0, 1.0);
    let index = ((norm_x * size as f64).floor() as usize).min(size - 1);

    let inv_y = (1.0 - point.y / config.canvas_height).clamp(0.0, 1.0);
    let shift = ((inv_y * (MAX_OCTAVE_SHIFT + 1) as f64).floor() as i32).min(MAX_OCTAVE_SHIFT);

    let octave = (base_octave + shift).clamp(MIN_OCTAVE, MAX_OCTAVE);
    (scale.degree(index), octave)
}
