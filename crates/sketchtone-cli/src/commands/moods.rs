//! Moods command implementation
//!
//! Lists the mood catalog.

use anyhow::Result;
use colored::Colorize;
use sketchtone_spec::Mood;
use std::process::ExitCode;

use super::json_output::{CommandOutput, MoodEntry};

/// Catalog entries in display order.
pub fn catalog() -> Vec<MoodEntry> {
    Mood::ALL.into_iter().map(MoodEntry::from).collect()
}

/// Run the moods command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let entries = catalog();

    if json_output {
        CommandOutput::success(entries).print()?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Moods:".cyan().bold());
    for entry in &entries {
        println!(
            "  {} {} {}  {} x{:.1}  {}",
            format!("{:<8}", entry.name).bold(),
            "octave".dimmed(),
            entry.base_octave,
            "duration".dimmed(),
            entry.duration_ratio,
            entry.description.dimmed()
        );
    }
    Ok(ExitCode::SUCCESS)
}
