//! # intent-jsonl JSON Lines Support (`common::jsonl`)
//!
//! File: cli/src/common/jsonl/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything needed to turn intent records into JSON Lines output:
//!
//! - **`formatter`**: a `serde_json` formatter for the spaced single-line
//!   layout (`{"tag": "x", "patterns": [...]}`) with optional ASCII-only
//!   escaping.
//! - **`writer`**: the record serializer itself (`to_jsonl_string`,
//!   `write_jsonl`, `save_jsonl`) and its `JsonlOptions`.
//!
//! The writer functions are re-exported here, so callers write
//! `jsonl::save_jsonl(...)`.
//!

/// Single-line `serde_json` formatter.
pub mod formatter;
/// Record serializer and output options.
pub mod writer;

pub use writer::{save_jsonl, to_jsonl_string, write_jsonl, JsonlOptions};
