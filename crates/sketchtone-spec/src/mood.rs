//! Fixed catalog of mood profiles.
//!
//! A mood sets the base octave of every voice and scales note durations.
//! The catalog is closed: lookups by name either resolve to one of the
//! entries below or fail with [`SpecError::UnknownMood`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{SpecError, SpecResult};

/// Lowest octave any note may use.
pub const MIN_OCTAVE: i32 = 2;
/// Highest octave any note may use.
pub const MAX_OCTAVE: i32 = 7;
/// Largest upward octave shift the note mapper can apply.
pub const MAX_OCTAVE_SHIFT: i32 = 3;

/// Emotional tone selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Light and fast.
    Joy,
    /// Bright, moderate tempo.
    Hope,
    /// Relaxed and slow.
    Serene,
    /// Intense and very fast.
    Angry,
    /// High and fast.
    Intense,
    /// Very slow and low.
    Sorrow,
    /// Irregular and fast.
    Anxious,
}

/// Musical parameters attached to a mood.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoodProfile {
    /// Display name.
    pub name: &'static str,
    /// Octave used for notes drawn along the bottom of the canvas.
    pub base_octave: i32,
    /// Multiplier applied to every note duration.
    pub duration_ratio: f64,
    /// Human-readable description shown in reports.
    pub description: &'static str,
}

impl Mood {
    /// Every mood, in catalog order.
    pub const ALL: [Mood; 7] = [
        Mood::Joy,
        Mood::Hope,
        Mood::Serene,
        Mood::Angry,
        Mood::Intense,
        Mood::Sorrow,
        Mood::Anxious,
    ];

    /// Returns the profile for this mood.
    pub const fn profile(self) -> MoodProfile {
        match self {
            Mood::Joy => MoodProfile {
                name: "Joy",
                base_octave: 4,
                duration_ratio: 0.5,
                description: "Light and fast tempo (base octave 4)",
            },
            Mood::Hope => MoodProfile {
                name: "Hope",
                base_octave: 4,
                duration_ratio: 0.8,
                description: "Bright, moderate tempo (base octave 4)",
            },
            Mood::Serene => MoodProfile {
                name: "Serene",
                base_octave: 3,
                duration_ratio: 1.5,
                description: "Relaxed, slow tempo (base octave 3)",
            },
            Mood::Angry => MoodProfile {
                name: "Angry",
                base_octave: 3,
                duration_ratio: 0.4,
                description: "Intense, very fast tempo (base octave 3)",
            },
            Mood::Intense => MoodProfile {
                name: "Intense",
                base_octave: 4,
                duration_ratio: 0.5,
                description: "High and fast tempo (base octave 4)",
            },
            Mood::Sorrow => MoodProfile {
                name: "Sorrow",
                base_octave: 2,
                duration_ratio: 2.0,
                description: "Very slow, low tempo (base octave 2)",
            },
            Mood::Anxious => MoodProfile {
                name: "Anxious",
                base_octave: 3,
                duration_ratio: 0.7,
                description: "Irregular, fast tempo (base octave 3)",
            },
        }
    }

    /// Display name of the mood.
    pub const fn name(self) -> &'static str {
        self.profile().name
    }

    /// Resolves a mood by name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> SpecResult<Mood> {
        let wanted = name.trim();
        Mood::ALL
            .iter()
            .copied()
            .find(|mood| mood.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SpecError::UnknownMood {
                name: name.to_string(),
                expected: Mood::ALL.map(Mood::name).join(", "),
            })
    }
}

impl FromStr for Mood {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::from_name(s)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Mood::from_name("joy").unwrap(), Mood::Joy);
        assert_eq!(Mood::from_name("  SORROW ").unwrap(), Mood::Sorrow);
        assert_eq!("Anxious".parse::<Mood>().unwrap(), Mood::Anxious);
    }

    #[test]
    fn test_unknown_mood_fails_closed() {
        let err = Mood::from_name("bored").unwrap_err();
        match err {
            SpecError::UnknownMood { name, expected } => {
                assert_eq!(name, "bored");
                assert!(expected.starts_with("Joy, Hope"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_catalog_octaves_leave_shift_headroom() {
        for mood in Mood::ALL {
            let profile = mood.profile();
            assert!(profile.base_octave >= MIN_OCTAVE, "{mood}");
            assert!(profile.base_octave + MAX_OCTAVE_SHIFT <= MAX_OCTAVE, "{mood}");
            assert!(profile.duration_ratio > 0.0, "{mood}");
        }
    }

    #[test]
    fn test_serde_uses_snake_case_keys() {
        assert_eq!(serde_json::to_string(&Mood::Serene).unwrap(), "\"serene\"");
        let mood: Mood = serde_json::from_str("\"intense\"").unwrap();
        assert_eq!(mood, Mood::Intense);
    }
}
