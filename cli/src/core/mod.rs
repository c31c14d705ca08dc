//! # intent-jsonl Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the core pieces the command layer is built on:
//! - `config`: Configuration loading, merging, and validation
//! - `dataset`: Loading the intent dataset (built-in or from a file)
//! - `error`: Error types and result aliases
//! - `intent`: The intent record data model
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::dataset; // For obtaining the records to convert
//! use crate::core::error::{IntentError, Result};
//! ```
//!
pub mod config;
pub mod dataset;
pub mod error;
pub mod intent;
