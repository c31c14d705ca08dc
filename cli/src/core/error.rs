//! # intent-jsonl Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout intent-jsonl. Every
//! failure the converter can hit falls into one of a small number of kinds,
//! and each kind is its own `IntentError` variant so callers can tell them
//! apart and decide whether to retry or give up.
//!
//! ## Architecture
//!
//! The error system consists of two layers:
//! - `IntentError`: a `thiserror` enum returned by the dataset loader, the
//!   JSONL serializer and the filesystem helpers (`IntentResult<T>`).
//! - `Result<T>`: an alias for `anyhow::Result<T>` used by the command layer,
//!   where errors pick up human-readable context on their way to `main`.
//!
//! The kinds are:
//! - Configuration errors (bad TOML, invalid paths)
//! - Filesystem errors (a path that exists but has the wrong type)
//! - I/O errors on a named file, or on an arbitrary output sink
//! - Dataset parse errors (input is not a valid `{"intents": [...]}` document)
//! - Serialization errors (a record could not be encoded)
//!
//! ## Examples
//!
//! ```rust,ignore
//! match jsonl::save_jsonl(&dataset.intents, path, &options) {
//!     Ok(written) => println!("{}", written.display()),
//!     Err(IntentError::Io { path, .. }) => eprintln!("cannot write {}", path.display()),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for intent-jsonl.
// No PartialEq: io::Error and serde_json::Error don't implement it.
#[derive(Error, Debug)]
pub enum IntentError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write JSONL output: {0}")]
    SinkWrite(#[source] std::io::Error),

    #[error("Failed to parse intent dataset from {origin}: {source}")]
    DatasetParse {
        origin: String,
        source: serde_json::Error,
    },

    #[error("Failed to serialize intent '{tag}': {source}")]
    Serialization {
        tag: String,
        source: serde_json::Error,
    },
}

impl IntentError {
    /// True for failures of the underlying write or read, as opposed to bad data.
    pub fn is_io(&self) -> bool {
        matches!(self, IntentError::Io { .. } | IntentError::SinkWrite(_))
    }
}

/// Result type for the typed, library-level routines.
pub type IntentResult<T> = std::result::Result<T, IntentError>;

/// Type alias for Result using anyhow::Error, used by the command layer.
pub type Result<T> = anyhow::Result<T>;
