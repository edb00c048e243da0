//! Analyze command implementation
//!
//! Reports per-stroke geometry and the notes each stroke would produce,
//! without synthesizing audio.

use anyhow::Result;
use colored::Colorize;
use sketchtone_backend_audio::analyze_strokes;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{AnalyzeResult, CommandOutput, JsonError};
use crate::input::{load_config, load_strokes, LoadResult};

/// Run the analyze command
///
/// # Returns
/// Exit code: 0 success, 1 input/config error
pub fn run(input: &str, config: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let result = execute(input, config);

    if json_output {
        let code = if result.is_ok() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        };
        match result {
            Ok(result) => CommandOutput::success(result).print()?,
            Err(error) => CommandOutput::<AnalyzeResult>::failure(error).print()?,
        }
        return Ok(code);
    }

    println!("{} {}", "Analyzing:".cyan().bold(), input);
    let result = match result {
        Ok(result) => result,
        Err(error) => {
            println!(
                "\n{} [{}] {}",
                "FAILED".red().bold(),
                error.code.red(),
                error.message
            );
            return Ok(ExitCode::from(1));
        }
    };

    println!(
        "{} {} ({})",
        "Source:".dimmed(),
        result.document_kind,
        &result.source_hash[..16]
    );
    println!();
    for stroke in &result.strokes {
        let line = format!(
            "Stroke {}: {} points | length {:.0}px | complexity {:.2} -> {} scale | {} notes",
            stroke.stroke_index,
            stroke.points,
            stroke.metrics.total_length,
            stroke.metrics.sharpness,
            stroke.scale.label(),
            stroke.note_count
        );
        if stroke.note_count == 0 {
            println!("  {} {} {}", "-".yellow(), line.dimmed(), "(skipped)".yellow());
        } else {
            println!("  {} {}", "+".green(), line);
        }
    }
    println!(
        "\n{} {} of {} stroke(s) playable",
        "Summary:".cyan().bold(),
        result.playable,
        result.strokes.len()
    );

    Ok(ExitCode::SUCCESS)
}

/// Loads and analyzes a stroke document.
pub fn execute(input: &str, config: Option<&str>) -> std::result::Result<AnalyzeResult, JsonError> {
    let config = load_config(config.map(Path::new)).map_err(|e| JsonError::from(&e))?;
    let LoadResult {
        strokes,
        document_kind,
        source_hash,
    } = load_strokes(Path::new(input)).map_err(|e| JsonError::from(&e).with_file(input))?;

    let analysis = analyze_strokes(&strokes, &config);
    let playable = analysis.iter().filter(|s| s.note_count > 0).count();

    Ok(AnalyzeResult {
        input: input.to_string(),
        document_kind: document_kind.as_str().to_string(),
        source_hash,
        playable,
        strokes: analysis,
    })
}
