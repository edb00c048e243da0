//! Engine configuration.
//!
//! Every tunable constant of the pipeline lives in [`EngineConfig`]. One
//! instance is built at startup (defaults, optionally overridden from a JSON
//! file) and passed by reference to each component.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{SpecError, SpecResult};
use crate::mood::Mood;

/// Tunable parameters for stroke analysis and synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Canvas width in pixels, used to normalize x.
    pub canvas_width: f64,
    /// Canvas height in pixels, used to normalize y.
    pub canvas_height: f64,
    /// Sharpness at or above which the major scale is used.
    pub sharpness_mid: f64,
    /// Sharpness at or above which the chromatic scale is used.
    pub sharpness_high: f64,
    /// Stroke length (pixels) treated as the reference for note duration.
    pub max_expected_length: f64,
    /// Pixels of stroke length per generated note.
    pub pixels_per_note: f64,
    /// Upper bound on notes generated from a single stroke.
    pub max_notes_per_stroke: usize,
    /// Base note duration in seconds, before length and mood scaling.
    pub base_note_duration: f64,
    /// Peak amplitude of each synthesized tone, in 16-bit sample units.
    pub amplitude: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            canvas_width: 750.0,
            canvas_height: 500.0,
            sharpness_mid: 0.25,
            sharpness_high: 0.5,
            max_expected_length: 2500.0,
            pixels_per_note: 50.0,
            max_notes_per_stroke: 32,
            base_note_duration: 0.3,
            amplitude: 4096.0,
        }
    }
}

/// Ratio cap applied to `length / max_expected_length` when sizing notes.
pub const MAX_LENGTH_RATIO: f64 = 1.5;

/// Highest accepted output sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Highest accepted `max_notes_per_stroke`.
pub const MAX_NOTES_PER_STROKE: usize = 256;

/// Longest note, in seconds, that any stroke and mood may produce.
pub const MAX_NOTE_SECONDS: f64 = 10.0;

impl EngineConfig {
    /// Parses a (possibly partial) JSON config and validates it.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> SpecResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON config file and validates it.
    pub fn load(path: &Path) -> SpecResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks that every field is usable by the pipeline.
    pub fn validate(&self) -> SpecResult<()> {
        if self.sample_rate == 0 || self.sample_rate > MAX_SAMPLE_RATE {
            return Err(SpecError::invalid_config(
                "sample_rate",
                format!("must be in 1..={}, got {}", MAX_SAMPLE_RATE, self.sample_rate),
            ));
        }
        positive("canvas_width", self.canvas_width)?;
        positive("canvas_height", self.canvas_height)?;
        positive("sharpness_mid", self.sharpness_mid)?;
        positive("sharpness_high", self.sharpness_high)?;
        if self.sharpness_high <= self.sharpness_mid {
            return Err(SpecError::invalid_config(
                "sharpness_high",
                format!(
                    "must be greater than sharpness_mid ({}), got {}",
                    self.sharpness_mid, self.sharpness_high
                ),
            ));
        }
        positive("max_expected_length", self.max_expected_length)?;
        positive("pixels_per_note", self.pixels_per_note)?;
        if self.max_notes_per_stroke == 0 || self.max_notes_per_stroke > MAX_NOTES_PER_STROKE {
            return Err(SpecError::invalid_config(
                "max_notes_per_stroke",
                format!(
                    "must be in 1..={}, got {}",
                    MAX_NOTES_PER_STROKE, self.max_notes_per_stroke
                ),
            ));
        }
        positive("base_note_duration", self.base_note_duration)?;
        let longest = self.longest_note_seconds();
        if longest > MAX_NOTE_SECONDS {
            return Err(SpecError::invalid_config(
                "base_note_duration",
                format!(
                    "notes could last {:.1}s (limit {}s); got {}",
                    longest, MAX_NOTE_SECONDS, self.base_note_duration
                ),
            ));
        }
        positive("amplitude", self.amplitude)?;
        if self.amplitude > i16::MAX as f64 {
            return Err(SpecError::invalid_config(
                "amplitude",
                format!("must be <= {}, got {}", i16::MAX, self.amplitude),
            ));
        }
        Ok(())
    }

    /// Duration of a note from the longest stroke in the slowest mood.
    pub fn longest_note_seconds(&self) -> f64 {
        let slowest = Mood::ALL
            .iter()
            .map(|mood| mood.profile().duration_ratio)
            .fold(0.0, f64::max);
        self.base_note_duration * MAX_LENGTH_RATIO * slowest
    }
}

fn positive(field: &str, value: f64) -> SpecResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SpecError::invalid_config(
            field,
            format!("must be a positive finite number, got {}", value),
        ))
    }
}
