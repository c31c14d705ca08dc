//! # intent-jsonl Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module centralizes the filesystem input/output operations the
//! converter needs: reading a dataset or config file into a string, writing
//! the finished JSONL blob, and (when asked) creating the output directory.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: creates a directory and its parents if missing.
//!   Fails if the path exists but is not a directory.
//! - **`read_file_to_string`**: `fs::read_to_string` with the path attached to
//!   the error.
//! - **`write_file`**: replaces the whole content of a file in one write.
//!   Unlike `ensure_dir_exists` it never creates parent directories, so
//!   writing into a missing directory is reported as an I/O error.
//!
//! All functions return `IntentResult` so callers can match on
//! `IntentError::Io` versus `IntentError::FileSystem`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::common::fs::io;
//!
//! io::ensure_dir_exists(Path::new("./out"))?;
//! io::write_file(Path::new("./out/intents.jsonl"), "{}")?;
//! let text = io::read_file_to_string(Path::new("./out/intents.jsonl"))?;
//! ```
//!
use crate::core::error::{IntentError, IntentResult};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, the directory is created along with any
/// missing parents (like `mkdir -p`).
///
/// # Errors
///
/// - `IntentError::FileSystem` if the path exists but is not a directory.
/// - `IntentError::Io` if creating the directory fails (e.g. permissions).
pub fn ensure_dir_exists(path: &Path) -> IntentResult<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|source| IntentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        return Err(IntentError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
///
/// # Errors
///
/// Returns `IntentError::Io` carrying the path if the file cannot be opened or
/// read, or is not valid UTF-8.
pub fn read_file_to_string(path: &Path) -> IntentResult<String> {
    debug!("Reading file: {:?}", path);
    fs::read_to_string(path).map_err(|source| IntentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `content` as the complete content of the file at `path`.
///
/// An existing file is truncated and replaced. The parent directory must
/// already exist.
///
/// # Errors
///
/// Returns `IntentError::Io` if the file cannot be created or written
/// (missing directory, permissions, disk full). A failed write may leave a
/// truncated file behind.
pub fn write_file(path: &Path, content: impl AsRef<[u8]>) -> IntentResult<()> {
    let content = content.as_ref();
    fs::write(path, content).map_err(|source| IntentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} bytes to file: {:?}", content.len(), path);
    Ok(())
}
