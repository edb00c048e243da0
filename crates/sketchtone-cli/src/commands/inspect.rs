//! Inspect command implementation
//!
//! Decodes a WAV file and reports its format, length, peak level, and PCM
//! hash. The hash matches the one recorded in generation reports.

use anyhow::Result;
use colored::Colorize;
use sketchtone_backend_audio::wav::{pcm_hash, samples_to_pcm16};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, CommandOutput, InspectResult, JsonError};

/// Run the inspect command
///
/// # Returns
/// Exit code: 0 success, 1 unreadable or unsupported file
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let result = inspect_wav(Path::new(input));

    if json_output {
        let code = if result.is_ok() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        };
        match result {
            Ok(result) => CommandOutput::success(result).print()?,
            Err(error) => CommandOutput::<InspectResult>::failure(error).print()?,
        }
        return Ok(code);
    }

    println!("{} {}", "Inspecting:".cyan().bold(), input);
    match result {
        Ok(info) => {
            println!("  {} {} Hz", "Sample rate:".dimmed(), info.sample_rate);
            println!("  {} {}", "Channels:".dimmed(), info.channels);
            println!("  {} {}", "Bits:".dimmed(), info.bits_per_sample);
            println!("  {} {}", "Samples:".dimmed(), info.num_samples);
            println!("  {} {:.3}s", "Duration:".dimmed(), info.duration_seconds);
            println!("  {} {}", "Peak:".dimmed(), info.peak);
            println!("  {} {}", "PCM hash:".dimmed(), info.pcm_hash);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            println!("\n{} {}", "FAILED".red().bold(), error.message);
            Ok(ExitCode::from(1))
        }
    }
}

/// Decodes a 16-bit integer PCM WAV file.
pub fn inspect_wav(path: &Path) -> std::result::Result<InspectResult, JsonError> {
    let file = path.display().to_string();
    let decode_error = |message: String| {
        JsonError::new(error_codes::WAV_DECODE, message).with_file(file.clone())
    };

    let mut reader = hound::WavReader::open(path)
        .map_err(|e| decode_error(format!("failed to open WAV: {}", e)))?;
    let spec = reader.spec();
    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(decode_error(format!(
            "unsupported WAV format: {} bit {:?} (expected 16 bit integer PCM)",
            spec.bits_per_sample, spec.sample_format
        )));
    }

    let samples = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<i16>, _>>()
        .map_err(|e| decode_error(format!("failed to read samples: {}", e)))?;

    let channels = spec.channels.max(1);
    let num_samples = samples.len() / channels as usize;
    let duration_seconds = if spec.sample_rate == 0 {
        0.0
    } else {
        num_samples as f64 / spec.sample_rate as f64
    };
    let peak = samples.iter().map(|s| s.unsigned_abs()).max().unwrap_or(0);

    Ok(InspectResult {
        input: file.clone(),
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        num_samples,
        duration_seconds,
        peak,
        pcm_hash: pcm_hash(&samples_to_pcm16(&samples)),
    })
}
