//! Report types for generation results.
//!
//! A [`Report`] describes one generation request: which mood was used, how
//! many voices were mixed, the encoded output, and a per-stroke analysis in
//! submission order.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::mood::Mood;
use crate::scale::Scale;

/// Report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Complete report for a generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (always 1).
    pub report_version: u32,
    /// Selected mood.
    pub mood: Mood,
    /// Description of the selected mood.
    pub mood_description: String,
    /// Number of voices that were mixed.
    pub voice_count: usize,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples in the mixed track.
    pub num_samples: usize,
    /// Mixed track duration in seconds.
    pub duration_seconds: f64,
    /// Hex-encoded BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
    /// Engine identifier and version (e.g. "sketchtone-backend-audio v0.1.0").
    pub backend_version: String,
    /// One entry per mixed voice, in stroke submission order.
    pub voices: Vec<VoiceReport>,
}

/// Analysis of one stroke that produced a voice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceReport {
    /// 1-based position of the stroke in the submitted list.
    pub stroke_index: usize,
    /// Total path length in pixels.
    pub length_px: f64,
    /// Mean absolute slope change along the stroke.
    pub sharpness: f64,
    /// Scale used for this voice.
    pub scale: Scale,
    /// Number of notes in the voice.
    pub note_count: usize,
}

impl Report {
    /// Creates a new report builder.
    pub fn builder(mood: Mood, backend_version: impl Into<String>) -> ReportBuilder {
        ReportBuilder::new(mood, backend_version)
    }

    /// Serializes the report to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a report from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Renders the human-readable summary shown after generation.
    pub fn to_summary(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(
            text,
            "Mood: {} | {} stroke(s) mixed | {}",
            self.mood, self.voice_count, self.mood_description
        );
        let _ = writeln!(text);
        let _ = writeln!(text, "Stroke analysis:");
        for voice in &self.voices {
            let _ = writeln!(
                text,
                "- Stroke {}: length {:.0}px | complexity {:.2} -> {} scale",
                voice.stroke_index,
                voice.length_px,
                voice.sharpness,
                voice.scale.label()
            );
        }
        text
    }
}

/// Builder for [`Report`].
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    mood: Mood,
    backend_version: String,
    sample_rate: u32,
    num_samples: usize,
    pcm_hash: String,
    voices: Vec<VoiceReport>,
}

impl ReportBuilder {
    /// Creates a builder for the given mood.
    pub fn new(mood: Mood, backend_version: impl Into<String>) -> Self {
        Self {
            mood,
            backend_version: backend_version.into(),
            sample_rate: 0,
            num_samples: 0,
            pcm_hash: String::new(),
            voices: Vec::new(),
        }
    }

    /// Records the encoded output.
    pub fn output(mut self, sample_rate: u32, num_samples: usize, pcm_hash: impl Into<String>) -> Self {
        self.sample_rate = sample_rate;
        self.num_samples = num_samples;
        self.pcm_hash = pcm_hash.into();
        self
    }

    /// Appends a voice entry.
    pub fn voice(mut self, voice: VoiceReport) -> Self {
        self.voices.push(voice);
        self
    }

    /// Builds the report.
    pub fn build(self) -> Report {
        let duration_seconds = if self.sample_rate > 0 {
            self.num_samples as f64 / self.sample_rate as f64
        } else {
            0.0
        };

        Report {
            report_version: REPORT_VERSION,
            mood: self.mood,
            mood_description: self.mood.profile().description.to_string(),
            voice_count: self.voices.len(),
            sample_rate: self.sample_rate,
            num_samples: self.num_samples,
            duration_seconds,
            pcm_hash: self.pcm_hash,
            backend_version: self.backend_version,
            voices: self.voices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_report() -> Report {
        Report::builder(Mood::Serene, "test v0")
            .output(44_100, 88_200, "ab".repeat(32))
            .voice(VoiceReport {
                stroke_index: 1,
                length_px: 1234.4,
                sharpness: 0.123,
                scale: Scale::Pentatonic,
                note_count: 24,
            })
            .voice(VoiceReport {
                stroke_index: 3,
                length_px: 320.0,
                sharpness: 0.75,
                scale: Scale::Chromatic,
                note_count: 6,
            })
            .build()
    }

    #[test]
    fn test_builder_fills_derived_fields() {
        let report = sample_report();
        assert_eq!(report.report_version, REPORT_VERSION);
        assert_eq!(report.voice_count, 2);
        assert_eq!(report.duration_seconds, 2.0);
        assert_eq!(report.mood_description, Mood::Serene.profile().description);
    }

    #[test]
    fn test_json_roundtrip() {
        let report = sample_report();
        let json = report.to_json_pretty().unwrap();
        assert!(json.contains("\"scale\": \"chromatic\""));
        assert_eq!(Report::from_json(&json).unwrap(), report);
    }

    #[test]
    fn test_compact_json_also_parses() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains('\n'));
        assert_eq!(Report::from_json(&json).unwrap(), report);
    }

    #[test]
    fn test_summary_lists_voices_in_order() {
        let summary = sample_report().to_summary();
        let lines: Vec<&str> = summary.lines().collect();
        assert!(lines[0].starts_with("Mood: Serene | 2 stroke(s) mixed"));
        assert_eq!(
            lines[3],
            "- Stroke 1: length 1234px | complexity 0.12 -> 5-note scale"
        );
        assert_eq!(
            lines[4],
            "- Stroke 3: length 320px | complexity 0.75 -> 12-note scale"
        );
    }

    #[test]
    fn test_empty_builder_has_zero_duration() {
        let report = ReportBuilder::new(Mood::Joy, "v").build();
        assert_eq!(report.duration_seconds, 0.0);
        assert_eq!(report.voice_count, 0);
    }
}
