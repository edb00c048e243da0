//! Sketchtone Canonical Types
//!
//! This crate provides the shared data model for turning freehand strokes
//! into melodies: stroke geometry input, the mood catalog, note scales, the
//! engine configuration, and generation reports.
//!
//! # Example
//!
//! ```
//! use sketchtone_spec::{EngineConfig, Mood, Scale, Stroke};
//!
//! let config = EngineConfig::default();
//! let mood = Mood::from_name("serene").unwrap();
//! assert_eq!(mood.profile().base_octave, 3);
//!
//! let scale = Scale::for_sharpness(0.1, config.sharpness_mid, config.sharpness_high);
//! assert_eq!(scale.len(), 5);
//!
//! let stroke = Stroke::from_coords([(0.0, 250.0), (375.0, 250.0)]);
//! assert_eq!(stroke.len(), 2);
//! ```
//!
//! # Modules
//!
//! - [`canvas`]: Import of canvas and stroke-list JSON documents
//! - [`config`]: Tunable engine parameters
//! - [`error`]: Error types and the [`BackendError`] trait
//! - [`mood`]: Fixed mood catalog
//! - [`report`]: Generation report and builder
//! - [`scale`]: Pitch classes and scales
//! - [`stroke`]: Points and strokes

pub mod canvas;
pub mod config;
pub mod error;
pub mod mood;
pub mod report;
pub mod scale;
pub mod stroke;

// Re-export commonly used types at the crate root
pub use canvas::{parse_document, strokes_from_canvas, DocumentKind};
pub use config::{
    EngineConfig, MAX_LENGTH_RATIO, MAX_NOTES_PER_STROKE, MAX_NOTE_SECONDS, MAX_SAMPLE_RATE,
};
pub use error::{BackendError, SpecError, SpecResult};
pub use mood::{Mood, MoodProfile, MAX_OCTAVE, MAX_OCTAVE_SHIFT, MIN_OCTAVE};
pub use report::{Report, ReportBuilder, VoiceReport, REPORT_VERSION};
pub use scale::{PitchClass, Scale};
pub use stroke::{Point, Stroke};
