//! # intent-jsonl Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the intent-jsonl CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Running the conversion and reporting failures
//!
//! ## Examples
//!
//! ```bash
//! # Convert the built-in dataset to ./RajputChatbotDataset.jsonl
//! intent-jsonl
//!
//! # Same, with info-level logging on stderr
//! intent-jsonl -v
//! ```
//!
//! Processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Hand off to the convert command
//! 4. Print any error and exit non-zero
//!
use clap::Parser;
use intent_jsonl::commands;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "intent-jsonl",
    about = "Convert chatbot intent datasets to JSON Lines",
    long_about = "Reads a chatbot intent dataset ({\"intents\": [...]}) and writes it as JSON Lines,\n\
                  one intent per line. Without --input, the built-in driving-school dataset is used.",
    version
)]
struct Cli {
    #[command(flatten)]
    convert: commands::convert::ConvertArgs,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::convert::handle_convert(cli.convert) {
        tracing::error!("Conversion failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
