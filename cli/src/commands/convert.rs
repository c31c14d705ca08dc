//! # intent-jsonl Convert Command
//!
//! File: cli/src/commands/convert.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements the one thing intent-jsonl does: load an intent dataset and
//! write it out as JSON Lines. It handles:
//! - Turning command-line flags into configuration overrides
//! - Loading the layered configuration
//! - Choosing the dataset (built-in, or `--input`)
//! - Writing to a file (printing its path) or to stdout
//!
//! ## Examples
//!
//! ```bash
//! # Built-in dataset to ./RajputChatbotDataset.jsonl
//! intent-jsonl
//!
//! # Custom dataset, custom destination, keep UTF-8 as-is
//! intent-jsonl -i intents.json -o build/intents.jsonl --create-dirs --unicode
//!
//! # Pipe somewhere else
//! intent-jsonl -o - | wc -l
//! ```
//!
use crate::common::jsonl::{self, JsonlOptions};
use crate::core::config::{self, Config, ConvertConfig, OutputTarget};
use crate::core::dataset;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

/// # Convert Arguments (`ConvertArgs`)
///
/// Every flag is optional. Unset flags fall back to the configuration files
/// and then to the built-in defaults.
#[derive(Parser, Debug, Default, Clone)]
pub struct ConvertArgs {
    /// Dataset file to convert (JSON object with an `intents` array).
    /// Defaults to the built-in driving-school dataset.
    #[arg(short, long, env = "INTENT_JSONL_INPUT", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file, or `-` for stdout. Defaults to RajputChatbotDataset.jsonl.
    #[arg(short, long, env = "INTENT_JSONL_OUTPUT", value_name = "FILE")]
    pub output: Option<String>,

    /// Write non-ASCII characters as UTF-8 instead of \uXXXX escapes.
    #[arg(long)]
    pub unicode: bool,

    /// Create the output file's parent directories if they are missing.
    #[arg(long)]
    pub create_dirs: bool,
}

impl ConvertArgs {
    /// Flags the user actually gave, as a config layer.
    fn to_overrides(&self) -> ConvertConfig {
        ConvertConfig {
            input: self
                .input
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
            output: self.output.clone(),
            ascii_only: self.unicode.then_some(false),
            create_dirs: self.create_dirs.then_some(true),
        }
    }
}

/// # Handle Convert Command (`handle_convert`)
///
/// Loads configuration with the flags applied on top, runs the conversion,
/// and prints the output path on success (nothing when writing to stdout).
pub fn handle_convert(args: ConvertArgs) -> Result<()> {
    info!("Handling convert command...");
    let cfg = config::load_config(&args.to_overrides())
        .context("Failed to load intent-jsonl configuration")?;

    if let Some(path) = convert(&cfg)? {
        println!("{}", path.display());
    }
    Ok(())
}

/// Runs one conversion with a fully resolved configuration.
///
/// Returns the written file's path, or `None` when the output went to stdout.
pub fn convert(cfg: &Config) -> Result<Option<PathBuf>> {
    let dataset = match cfg.convert.input_path() {
        Some(path) => dataset::load_from_path(&path)
            .with_context(|| format!("Failed to load dataset from '{}'", path.display()))?,
        None => dataset::builtin()?,
    };
    debug!("Converting {} intent(s)", dataset.intents.len());

    let options = JsonlOptions {
        ascii_only: cfg.convert.ascii_only(),
        create_dirs: cfg.convert.create_dirs(),
    };

    match cfg.convert.output_target() {
        OutputTarget::Stdout => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            jsonl::write_jsonl(&dataset.intents, &mut handle, &options)?;
            Ok(None)
        }
        OutputTarget::File(path) => {
            let written = jsonl::save_jsonl(&dataset.intents, &path, &options)
                .with_context(|| format!("Failed to write JSONL to '{}'", path.display()))?;
            Ok(Some(written))
        }
    }
}
