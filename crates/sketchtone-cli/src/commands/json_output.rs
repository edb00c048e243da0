//! JSON output types for machine-readable CLI output.
//!
//! Every command run with `--json` prints exactly one of these envelopes to
//! stdout: `success`, any `errors`, and the command's `result` on success.

use serde::Serialize;
use sketchtone_backend_audio::{AudioError, StrokeAnalysis};
use sketchtone_spec::{BackendError, Mood, Report};

use crate::input::InputError;

/// Error codes for CLI-level failures.
///
/// Spec and backend failures pass their own codes through (`SPEC_xxx`,
/// `AUDIO_xxx`).
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_002";
    /// Report file could not be written
    pub const REPORT_WRITE: &str = "CLI_003";
    /// WAV file could not be decoded
    pub const WAV_DECODE: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "AUDIO_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&InputError> for JsonError {
    fn from(err: &InputError) -> Self {
        JsonError::new(err.code(), err.to_string())
    }
}

impl From<&AudioError> for JsonError {
    fn from(err: &AudioError) -> Self {
        JsonError::new(err.code(), err.message())
    }
}

/// Envelope shared by every `--json` command.
#[derive(Debug, Clone, Serialize)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded.
    pub success: bool,
    /// Errors (empty on success).
    pub errors: Vec<JsonError>,
    /// Command result (absent on failure).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T: Serialize> CommandOutput<T> {
    /// Successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Failed output.
    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            errors: vec![error],
            result: None,
        }
    }

    /// Prints the envelope as pretty JSON on stdout.
    pub fn print(&self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

/// Result of `sketchtone generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResult {
    /// Path of the stroke document.
    pub input: String,
    /// Document shape (`canvas` or `strokes`).
    pub document_kind: String,
    /// BLAKE3 hash of the stroke document.
    pub source_hash: String,
    /// Number of strokes submitted.
    pub stroke_count: usize,
    /// Written WAV path.
    pub output: String,
    /// Written report path, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_path: Option<String>,
    /// Full generation report.
    pub report: Report,
}

/// Result of `sketchtone analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResult {
    /// Path of the stroke document.
    pub input: String,
    /// Document shape (`canvas` or `strokes`).
    pub document_kind: String,
    /// BLAKE3 hash of the stroke document.
    pub source_hash: String,
    /// Strokes that would produce at least one note.
    pub playable: usize,
    /// Per-stroke analysis in document order.
    pub strokes: Vec<StrokeAnalysis>,
}

/// One catalog entry in `sketchtone moods --json`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MoodEntry {
    /// Lookup key.
    pub key: Mood,
    /// Display name.
    pub name: String,
    /// Octave for notes at the bottom of the canvas.
    pub base_octave: i32,
    /// Note duration multiplier.
    pub duration_ratio: f64,
    /// Description.
    pub description: String,
}

impl From<Mood> for MoodEntry {
    fn from(mood: Mood) -> Self {
        let profile = mood.profile();
        Self {
            key: mood,
            name: profile.name.to_string(),
            base_octave: profile.base_octave,
            duration_ratio: profile.duration_ratio,
            description: profile.description.to_string(),
        }
    }
}

/// Result of `sketchtone inspect`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InspectResult {
    /// Inspected file.
    pub input: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count.
    pub channels: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Sample frames per channel.
    pub num_samples: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Largest absolute sample value.
    pub peak: u16,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
}
