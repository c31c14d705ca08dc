//! # intent-jsonl Dataset Loader
//!
//! File: cli/src/core/dataset.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Produces the ordered list of intent records to convert. A dataset is a
//! JSON document of the form:
//!
//! ```json
//! {
//!   "intents": [
//!     {"tag": "greeting", "patterns": ["Hi"], "responses": ["Hello!"]}
//!   ]
//! }
//! ```
//!
//! Two sources are supported:
//! - `builtin()`: the driving-school dataset bundled at `cli/data/intents.json`
//!   and compiled into the binary. This is what a bare `intent-jsonl` converts.
//! - `load_from_path()`: any dataset file on disk.
//!
//! Loading checks the shape only (three fields per record, nothing extra).
//! Duplicate tags, duplicate patterns and empty lists pass through untouched.
//!
use crate::common::fs::io;
use crate::core::error::{IntentError, IntentResult};
use crate::core::intent::IntentDataset;
use std::path::Path;
use tracing::{debug, info};

const BUILTIN_DATASET: &str = include_str!("../../data/intents.json");
const BUILTIN_ORIGIN: &str = "built-in dataset";

/// Parses dataset JSON text.
pub fn parse_str(text: &str) -> serde_json::Result<IntentDataset> {
    serde_json::from_str(text)
}

/// Returns the bundled dataset.
pub fn builtin() -> IntentResult<IntentDataset> {
    let dataset = parse_str(BUILTIN_DATASET).map_err(|source| IntentError::DatasetParse {
        origin: BUILTIN_ORIGIN.to_string(),
        source,
    })?;
    debug!("Loaded {} intent(s) from the {}", dataset.intents.len(), BUILTIN_ORIGIN);
    Ok(dataset)
}

/// Reads and parses a dataset file.
///
/// # Errors
///
/// - `IntentError::Io` if the file cannot be read.
/// - `IntentError::DatasetParse` if it is not valid dataset JSON.
pub fn load_from_path(path: &Path) -> IntentResult<IntentDataset> {
    let text = io::read_file_to_string(path)?;
    let dataset = parse_str(&text).map_err(|source| IntentError::DatasetParse {
        origin: format!("'{}'", path.display()),
        source,
    })?;
    info!(
        "Loaded {} intent(s) from {}",
        dataset.intents.len(),
        path.display()
    );
    Ok(dataset)
}
