//! Error types for audio backend.

use std::path::PathBuf;

use sketchtone_spec::{BackendError, SpecError};
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during melody generation.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Mood lookup or configuration failure.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// Every stroke was too short (or empty) to produce a voice.
    #[error("no valid strokes: none of the {strokes} submitted stroke(s) is long enough to play")]
    NoValidInput {
        /// Number of strokes submitted.
        strokes: usize,
    },

    /// Writing the encoded audio failed.
    #[error("failed to write audio to {}: {source}", path.display())]
    Encoding {
        /// Destination path.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: std::io::Error,
    },
}

impl AudioError {
    /// Creates an encoding error for `path`.
    pub fn encoding(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Encoding {
            path: path.into(),
            source,
        }
    }

    /// Returns true for failures caused by the request itself (unknown mood,
    /// bad config) rather than by generation or encoding.
    pub fn is_input_error(&self) -> bool {
        matches!(self, AudioError::Spec(_))
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::Spec(inner) => inner.code(),
            AudioError::NoValidInput { .. } => "AUDIO_001",
            AudioError::Encoding { .. } => "AUDIO_002",
        }
    }

    fn category(&self) -> &'static str {
        match self {
            AudioError::Spec(inner) => inner.category(),
            _ => "audio",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_codes_and_input_classification() {
        let mood = AudioError::from(SpecError::UnknownMood {
            name: "bored".into(),
            expected: "Joy".into(),
        });
        assert_eq!(mood.code(), "SPEC_001");
        assert_eq!(mood.category(), "spec");
        assert!(mood.is_input_error());

        let empty = AudioError::NoValidInput { strokes: 3 };
        assert_eq!(empty.code(), "AUDIO_001");
        assert_eq!(empty.category(), "audio");
        assert!(!empty.is_input_error());
    }

    #[test]
    fn test_encoding_error_keeps_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = AudioError::encoding("/tmp/out.wav", io);
        assert!(err.to_string().contains("/tmp/out.wav"));
        assert!(err.source().is_some());
        assert_eq!(err.code(), "AUDIO_002");
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_spec_errors_keep_their_code() {
        let err: AudioError = SpecError::invalid_config("amplitude", "too loud").into();
        assert_eq!(err.code(), "SPEC_002");
        assert_eq!(err.category(), "spec");
    }
}
