//! CLI command implementations

pub mod analyze;
pub mod generate;
pub mod inspect;
pub mod json_output;
pub mod moods;
