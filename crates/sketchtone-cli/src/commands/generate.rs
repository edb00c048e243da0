//! Generate command implementation
//!
//! Loads strokes, renders the melody for a mood, and writes the WAV (plus an
//! optional JSON report).

use anyhow::Result;
use colored::Colorize;
use sketchtone_backend_audio::{generate, AudioError};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, CommandOutput, GenerateResult, JsonError};
use crate::input::{load_config, load_strokes, InputError, LoadResult};

/// Output path used when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "output_melody.wav";

/// A failed run: the exit code to return and the error to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// 1 for bad input, mood, or config; 2 for generation or encoding.
    pub exit_code: u8,
    /// Structured error.
    pub error: JsonError,
}

impl Failure {
    fn input(err: &InputError) -> Self {
        Self {
            exit_code: 1,
            error: err.into(),
        }
    }

    fn audio(err: &AudioError) -> Self {
        Self {
            exit_code: if err.is_input_error() { 1 } else { 2 },
            error: err.into(),
        }
    }
}

/// Run the generate command
///
/// # Arguments
/// * `input` - Path to the stroke document (canvas or plain strokes)
/// * `mood` - Mood name (case-insensitive)
/// * `output` - WAV output path (default: `output_melody.wav`)
/// * `report` - Optional path for the JSON report
/// * `config` - Optional engine config file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 input/mood/config error, 2 generation error
pub fn run(
    input: &str,
    mood: &str,
    output: Option<&str>,
    report: Option<&str>,
    config: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(input, mood, output, report, config)
    } else {
        run_human(input, mood, output, report, config)
    }
}

/// Generates and writes every output, without printing.
pub fn execute(
    input: &str,
    mood: &str,
    output: Option<&str>,
    report: Option<&str>,
    config: Option<&str>,
) -> std::result::Result<GenerateResult, Failure> {
    let config = load_config(config.map(Path::new)).map_err(|e| Failure::input(&e))?;
    let LoadResult {
        strokes,
        document_kind,
        source_hash,
    } = load_strokes(Path::new(input)).map_err(|e| Failure::input(&e))?;

    let result = generate(&strokes, mood, &config).map_err(|e| Failure::audio(&e))?;

    let output = output.unwrap_or(DEFAULT_OUTPUT);
    result
        .wav
        .write_to(Path::new(output))
        .map_err(|e| Failure::audio(&e))?;

    if let Some(report_path) = report {
        write_report(&result.report, report_path)?;
    }

    Ok(GenerateResult {
        input: input.to_string(),
        document_kind: document_kind.as_str().to_string(),
        source_hash,
        stroke_count: strokes.len(),
        output: output.to_string(),
        report_path: report.map(str::to_string),
        report: result.report,
    })
}

fn write_report(report: &sketchtone_spec::Report, path: &str) -> std::result::Result<(), Failure> {
    let json = report.to_json_pretty().map_err(|e| Failure {
        exit_code: 2,
        error: JsonError::new(error_codes::JSON_SERIALIZE, e.to_string()),
    })?;
    std::fs::write(path, json).map_err(|e| Failure {
        exit_code: 2,
        error: JsonError::new(
            error_codes::REPORT_WRITE,
            format!("failed to write report: {}", e),
        )
        .with_file(path),
    })
}

/// Run generate with human-readable (colored) output
fn run_human(
    input: &str,
    mood: &str,
    output: Option<&str>,
    report: Option<&str>,
    config: Option<&str>,
) -> Result<ExitCode> {
    println!("{} {}", "Generating from:".cyan().bold(), input);
    println!("{} {}", "Mood:".cyan().bold(), mood);
    if let Some(config) = config {
        println!("{} {}", "Config:".dimmed(), config);
    }

    match execute(input, mood, output, report, config) {
        Ok(result) => {
            println!(
                "{} {} ({}), {} stroke(s)",
                "Source:".dimmed(),
                result.document_kind,
                &result.source_hash[..16],
                result.stroke_count
            );
            println!();
            print!("{}", result.report.to_summary());
            println!();
            println!(
                "{} Wrote {} ({} samples, {:.2}s)",
                "SUCCESS".green().bold(),
                result.output,
                result.report.num_samples,
                result.report.duration_seconds
            );
            if let Some(report_path) = &result.report_path {
                println!("{} {}", "Report:".dimmed(), report_path);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            println!(
                "\n{} [{}] {}",
                "FAILED".red().bold(),
                failure.error.code.red(),
                failure.error.message
            );
            Ok(ExitCode::from(failure.exit_code))
        }
    }
}

/// Run generate with machine-readable JSON output
fn run_json(
    input: &str,
    mood: &str,
    output: Option<&str>,
    report: Option<&str>,
    config: Option<&str>,
) -> Result<ExitCode> {
    match execute(input, mood, output, report, config) {
        Ok(result) => {
            CommandOutput::success(result).print()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            CommandOutput::<GenerateResult>::failure(failure.error).print()?;
            Ok(ExitCode::from(failure.exit_code))
        }
    }
}
