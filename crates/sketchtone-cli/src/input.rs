//! Loading stroke documents and engine configs from disk.
//!
//! Stroke files are JSON in one of two shapes: a canvas export
//! (`{"objects": [...]}`) or a plain stroke list (`{"strokes": [...]}`).
//! Both load into the same [`LoadResult`], with the source hash kept for
//! provenance.

use sketchtone_spec::{parse_document, BackendError, DocumentKind, EngineConfig, SpecError, Stroke};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result of loading a stroke document.
#[derive(Debug)]
pub struct LoadResult {
    /// Strokes in document order.
    pub strokes: Vec<Stroke>,
    /// Which document shape was read.
    pub document_kind: DocumentKind,
    /// BLAKE3 hash of the file content (hex string).
    pub source_hash: String,
}

/// Errors that can occur while loading CLI inputs.
#[derive(Debug, Error)]
pub enum InputError {
    /// File could not be read.
    #[error("failed to read file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not a usable stroke document.
    #[error("invalid stroke document: {0}")]
    Document(#[source] SpecError),

    /// Config file is malformed or out of range.
    #[error("invalid config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: SpecError,
    },
}

impl InputError {
    /// Stable code for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            InputError::FileRead { .. } => "CLI_001",
            InputError::Document(inner) | InputError::Config { source: inner, .. } => {
                inner.code()
            }
        }
    }
}

/// Loads strokes from a JSON file.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use sketchtone_cli::input::load_strokes;
///
/// let result = load_strokes(Path::new("drawing.json")).unwrap();
/// println!("{} strokes", result.strokes.len());
/// ```
pub fn load_strokes(path: &Path) -> Result<LoadResult, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let (document_kind, strokes) = parse_document(&content).map_err(InputError::Document)?;
    tracing::debug!(
        path = %path.display(),
        kind = document_kind.as_str(),
        strokes = strokes.len(),
        "loaded stroke document"
    );

    Ok(LoadResult {
        strokes,
        document_kind,
        source_hash,
    })
}

/// Loads the engine config, falling back to defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig, InputError> {
    match path {
        Some(path) => EngineConfig::load(path).map_err(|source| match source {
            SpecError::Io(source) => InputError::FileRead {
                path: path.to_path_buf(),
                source,
            },
            source => InputError::Config {
                path: path.to_path_buf(),
                source,
            },
        }),
        None => Ok(EngineConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_plain_strokes() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("strokes.json");
        std::fs::write(&path, r#"{"strokes": [[[0, 0], [100, 0]], [[5, 5]]]}"#).unwrap();

        let result = load_strokes(&path).unwrap();
        assert_eq!(result.document_kind, DocumentKind::Strokes);
        assert_eq!(result.strokes.len(), 2);
        assert_eq!(result.source_hash.len(), 64);
    }

    #[test]
    fn test_load_canvas_document() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("canvas.json");
        std::fs::write(
            &path,
            r#"{"objects": [{"type": "path", "path": [["M", 1, 2], ["Q", 3, 4, 5, 6]]}]}"#,
        )
        .unwrap();

        let result = load_strokes(&path).unwrap();
        assert_eq!(result.document_kind, DocumentKind::Canvas);
        assert_eq!(result.strokes[0].len(), 3);
    }

    #[test]
    fn test_missing_file_is_file_read() {
        let err = load_strokes(Path::new("/nonexistent/strokes.json")).unwrap_err();
        assert!(matches!(err, InputError::FileRead { .. }));
        assert_eq!(err.code(), "CLI_001");
    }

    #[test]
    fn test_bad_document_keeps_spec_code() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.json");
        std::fs::write(&path, r#"{"shapes": []}"#).unwrap();

        let err = load_strokes(&path).unwrap_err();
        assert!(matches!(err, InputError::Document(SpecError::InvalidCanvas { .. })));
        assert!(err.code().starts_with("SPEC_"));
    }

    #[test]
    fn test_config_defaults_and_overrides() {
        assert_eq!(load_config(None).unwrap(), EngineConfig::default());

        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cfg.json");
        std::fs::write(&path, r#"{"sample_rate": 22050}"#).unwrap();
        assert_eq!(load_config(Some(path.as_path())).unwrap().sample_rate, 22050);

        std::fs::write(&path, r#"{"pixels_per_note": -1}"#).unwrap();
        assert!(matches!(
            load_config(Some(path.as_path())).unwrap_err(),
            InputError::Config { .. }
        ));
    }
}
