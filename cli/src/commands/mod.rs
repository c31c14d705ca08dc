//! # intent-jsonl Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Command handlers invoked from the entry point (`main.rs`). Each module
//! defines its own arguments struct and a `handle_*` function.
//!
//! - `convert`: dataset to JSON Lines conversion (the default action)
//!

/// Converts an intent dataset to JSON Lines.
pub mod convert;
