//! # intent-jsonl Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Filesystem helpers shared by the dataset loader, the config loader and the
//! JSONL writer. Callers import the submodule directly, e.g.
//! `crate::common::fs::io::write_file`.
//!

/// Basic file I/O (`ensure_dir_exists`, `read_file_to_string`, `write_file`).
pub mod io;
