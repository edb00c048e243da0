//! Sketchtone CLI - turn drawn strokes into melodies
//!
//! This binary provides commands for generating melodies from stroke
//! documents, analyzing strokes, listing moods, and inspecting WAV output.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use sketchtone_cli::commands;

/// Sketchtone - Stroke-to-Melody Engine
#[derive(Parser)]
#[command(name = "sketchtone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a melody WAV from a stroke document
    Generate {
        /// Path to the stroke document (canvas export or plain strokes JSON)
        #[arg(short, long)]
        input: String,

        /// Mood name (joy, hope, serene, angry, intense, sorrow, anxious)
        #[arg(short, long)]
        mood: String,

        /// Output WAV path (default: output_melody.wav)
        #[arg(short, long)]
        output: Option<String>,

        /// Write the generation report as JSON to this path
        #[arg(short, long)]
        report: Option<String>,

        /// Engine config overrides (JSON)
        #[arg(short, long)]
        config: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List available moods
    Moods {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Analyze stroke geometry without rendering audio
    Analyze {
        /// Path to the stroke document
        #[arg(short, long)]
        input: String,

        /// Engine config overrides (JSON)
        #[arg(short, long)]
        config: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Decode a WAV file and print its format, peak, and PCM hash
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            input,
            mood,
            output,
            report,
            config,
            json,
        } => commands::generate::run(
            &input,
            &mood,
            output.as_deref(),
            report.as_deref(),
            config.as_deref(),
            json,
        ),
        Commands::Moods { json } => commands::moods::run(json),
        Commands::Analyze {
            input,
            config,
            json,
        } => commands::analyze::run(&input, config.as_deref(), json),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
