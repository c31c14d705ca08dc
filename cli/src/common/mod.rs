//! # intent-jsonl Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utility modules, kept apart from the command layer (`commands::`)
//! and the core data/config types (`core::`):
//!
//! - **`fs`**: reading and writing files, creating directories.
//! - **`jsonl`**: encoding intent records as JSON Lines.
//!

/// Utilities for filesystem operations.
pub mod fs;
/// JSON Lines encoding and output.
pub mod jsonl;
