//! Error types for catalog lookups, configuration, and input documents.

use thiserror::Error;

/// Result type for spec-level operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors raised while resolving moods, validating configuration, or reading
/// stroke documents.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Mood name is not part of the fixed catalog.
    #[error("unknown mood '{name}' (expected one of: {expected})")]
    UnknownMood {
        /// The name that failed to resolve.
        name: String,
        /// Comma-separated list of valid mood names.
        expected: String,
    },

    /// A configuration field holds an unusable value.
    #[error("invalid config field '{field}': {message}")]
    InvalidConfig {
        /// Field name as it appears in the JSON config.
        field: String,
        /// Error message.
        message: String,
    },

    /// A canvas or stroke document has the wrong shape.
    #[error("invalid canvas document: {message}")]
    InvalidCanvas {
        /// Error message.
        message: String,
    },

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading a document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpecError {
    /// Creates an invalid config error.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid canvas error.
    pub fn invalid_canvas(message: impl Into<String>) -> Self {
        Self::InvalidCanvas {
            message: message.into(),
        }
    }
}

/// Common trait for errors surfaced by backend crates.
///
/// Gives every backend error a stable code and a category so callers can
/// report failures uniformly without depending on the backend's error enum.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "AUDIO_001". These codes are stable and
    /// can be used for programmatic error handling.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

impl BackendError for SpecError {
    fn code(&self) -> &'static str {
        match self {
            SpecError::UnknownMood { .. } => "SPEC_001",
            SpecError::InvalidConfig { .. } => "SPEC_002",
            SpecError::InvalidCanvas { .. } => "SPEC_003",
            SpecError::Json(_) => "SPEC_004",
            SpecError::Io(_) => "SPEC_005",
        }
    }

    fn category(&self) -> &'static str {
        "spec"
    }
}
