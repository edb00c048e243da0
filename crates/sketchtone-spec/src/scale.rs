//! Pitch classes and the three canonical note scales.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the twelve chromatic pitch classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// All pitch classes in ascending order from C.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Lowercase name with `#` for sharps (e.g. `"c#"`).
    pub const fn name(self) -> &'static str {
        match self {
            PitchClass::C => "c",
            PitchClass::CSharp => "c#",
            PitchClass::D => "d",
            PitchClass::DSharp => "d#",
            PitchClass::E => "e",
            PitchClass::F => "f",
            PitchClass::FSharp => "f#",
            PitchClass::G => "g",
            PitchClass::GSharp => "g#",
            PitchClass::A => "a",
            PitchClass::ASharp => "a#",
            PitchClass::B => "b",
        }
    }

    /// Semitones above C.
    pub const fn semitone(self) -> u8 {
        self as u8
    }

    /// Parses a pitch class name, case-insensitively.
    ///
    /// Only the sharp spellings used by the scales are recognized.
    pub fn parse(name: &str) -> Option<PitchClass> {
        let name = name.trim();
        PitchClass::ALL
            .iter()
            .copied()
            .find(|pc| pc.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const PENTATONIC: [PitchClass; 5] = [
    PitchClass::C,
    PitchClass::D,
    PitchClass::E,
    PitchClass::G,
    PitchClass::A,
];

const MAJOR: [PitchClass; 7] = [
    PitchClass::C,
    PitchClass::D,
    PitchClass::E,
    PitchClass::F,
    PitchClass::G,
    PitchClass::A,
    PitchClass::B,
];

/// Note scale chosen per stroke from its sharpness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    /// Five notes: C D E G A. Used for smooth strokes.
    Pentatonic,
    /// Seven notes: C D E F G A B.
    Major,
    /// All twelve pitch classes. Used for jagged strokes.
    Chromatic,
}

impl Scale {
    /// Selects a scale from a sharpness score.
    ///
    /// `sharpness >= high` is chromatic, `mid <= sharpness < high` is major,
    /// anything below `mid` (including NaN) is pentatonic.
    pub fn for_sharpness(sharpness: f64, mid: f64, high: f64) -> Scale {
        if sharpness >= high {
            Scale::Chromatic
        } else if sharpness >= mid {
            Scale::Major
        } else {
            Scale::Pentatonic
        }
    }

    /// Scale degrees in ascending order.
    pub fn notes(self) -> &'static [PitchClass] {
        match self {
            Scale::Pentatonic => &PENTATONIC,
            Scale::Major => &MAJOR,
            Scale::Chromatic => &PitchClass::ALL,
        }
    }

    /// Number of degrees (5, 7, or 12).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(self) -> usize {
        self.notes().len()
    }

    /// Returns the degree at `index`, clamping out-of-range indices to the
    /// nearest end of the scale.
    pub fn degree(self, index: usize) -> PitchClass {
        let notes = self.notes();
        notes[index.min(notes.len() - 1)]
    }

    /// Size label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Scale::Pentatonic => "5-note",
            Scale::Major => "7-note",
            Scale::Chromatic => "12-note",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
