//! # intent-jsonl Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements configuration loading for intent-jsonl: where the
//! dataset comes from, where the JSONL goes, and how it is formatted. It
//! combines defaults, user settings, project settings and command-line
//! overrides into one `Config`.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags and their environment variables
//! 2. Project-specific `.intent-jsonl.toml` in the current directory or ancestors
//!    (the search stops at a directory containing `.git`)
//! 3. User-specific `~/.config/intent-jsonl/config.toml` (platform config dir)
//! 4. Default values defined in the code
//!
//! Every setting is optional in the files; unset values fall back to the
//! next source down. Paths are `~`-expanded, then validated before use.
//! Relative paths are relative to the current directory.
//!
//! ## Examples
//!
//! ```toml
//! [convert]
//! input = "~/datasets/driving-school.json"
//! output = "out/RajputChatbotDataset.jsonl"
//! ascii_only = true
//! create_dirs = true
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config(&ConvertConfig::default())?;
//! let target = cfg.convert.output_target();
//! ```
//!
use crate::core::error::{IntentError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Output file written when nothing else is configured.
pub const DEFAULT_OUTPUT: &str = "RajputChatbotDataset.jsonl";
/// Output value that selects standard output instead of a file.
pub const STDOUT_MARKER: &str = "-";

const PROJECT_CONFIG_FILENAME: &str = ".intent-jsonl.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
}

/// Settings for the conversion run (`[convert]` table).
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    /// Dataset file to read. Unset means the built-in dataset.
    pub input: Option<String>,
    /// File to write, or `-` for stdout.
    pub output: Option<String>,
    /// Escape non-ASCII characters as `\uXXXX` (default true).
    pub ascii_only: Option<bool>,
    /// Create missing parent directories of the output file (default false).
    pub create_dirs: Option<bool>,
}

/// Where the JSONL text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl ConvertConfig {
    pub fn output(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT)
    }

    pub fn ascii_only(&self) -> bool {
        self.ascii_only.unwrap_or(true)
    }

    pub fn create_dirs(&self) -> bool {
        self.create_dirs.unwrap_or(false)
    }

    pub fn input_path(&self) -> Option<PathBuf> {
        self.input.as_ref().map(PathBuf::from)
    }

    pub fn output_target(&self) -> OutputTarget {
        match self.output() {
            STDOUT_MARKER => OutputTarget::Stdout,
            path => OutputTarget::File(PathBuf::from(path)),
        }
    }

    /// Layers `self` on top of `base`: every value set in `self` wins.
    pub fn merged_over(self, base: ConvertConfig) -> ConvertConfig {
        ConvertConfig {
            input: self.input.or(base.input),
            output: self.output.or(base.output),
            ascii_only: self.ascii_only.or(base.ascii_only),
            create_dirs: self.create_dirs.or(base.create_dirs),
        }
    }
}

/// Loads user and project configuration, applies `overrides` on top, then
/// expands and validates the result.
pub fn load_config(overrides: &ConvertConfig) -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let user_path = user_config_path();
    load_config_from(user_path.as_deref(), &current_dir, overrides)
}

/// Same as `load_config`, with the user config file and search start made explicit.
pub fn load_config_from(
    user_config: Option<&Path>,
    start_dir: &Path,
    overrides: &ConvertConfig,
) -> Result<Config> {
    let user = match user_config {
        Some(path) if path.is_file() => {
            info!("Loading user configuration from: {}", path.display());
            Some(load_config_from_path(path)?)
        }
        Some(path) => {
            debug!("User configuration file not found at {}", path.display());
            None
        }
        None => None,
    };

    let project = match find_project_config_path(start_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            Some(load_config_from_path(&path)?)
        }
        None => {
            debug!(
                "No project configuration file ({}) found in {} or ancestors.",
                PROJECT_CONFIG_FILENAME,
                start_dir.display()
            );
            None
        }
    };

    let mut merged = merge_configs(user.unwrap_or_default(), project);
    merged.convert = overrides.clone().merged_over(merged.convert);
    expand_config_paths(&mut merged);
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

fn user_config_path() -> Option<PathBuf> {
    match ProjectDirs::from("com", "IntentJsonl", "intent-jsonl") {
        Some(proj_dirs) => Some(proj_dirs.config_dir().join("config.toml")),
        None => {
            warn!("Could not determine user config directory.");
            None
        }
    }
}

fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path = start_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content).map_err(|e| {
        anyhow!(IntentError::Config(format!(
            "Failed to parse TOML from file {}: {}",
            path.display(),
            e
        )))
    })
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    match project {
        Some(project) => Config {
            convert: project.convert.merged_over(user.convert),
        },
        None => user,
    }
}

fn expand_config_paths(config: &mut Config) {
    if let Some(input) = config.convert.input.as_mut() {
        *input = shellexpand::tilde(input).into_owned();
        debug!("Expanded input path: {}", input);
    }
    if let Some(output) = config.convert.output.as_mut() {
        *output = shellexpand::tilde(output).into_owned();
        debug!("Expanded output path: {}", output);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    let convert = &config.convert;

    if convert.output().trim().is_empty() {
        return Err(anyhow!(IntentError::Config(
            "Output path must not be empty.".to_string()
        )));
    }
    if let OutputTarget::File(path) = convert.output_target() {
        if path.is_dir() {
            return Err(anyhow!(IntentError::Config(format!(
                "Output path '{}' is a directory.",
                path.display()
            ))));
        }
    }

    if let Some(input) = convert.input_path() {
        if !input.exists() {
            return Err(anyhow!(IntentError::Config(format!(
                "Input dataset '{}' does not exist.",
                input.display()
            ))));
        }
        if !input.is_file() {
            return Err(anyhow!(IntentError::Config(format!(
                "Input dataset '{}' is not a file.",
                input.display()
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}
