//! # intent-jsonl Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each `.rs` file in
//! `cli/tests/` is compiled as its own test crate and pulls this in with
//! `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Name of the file the tool writes when no output is configured.
pub const DEFAULT_OUTPUT: &str = "RajputChatbotDataset.jsonl";

/// # Isolated Workspace (`workspace`)
///
/// Creates a temporary directory to run the binary in. It contains an empty
/// `.git` directory so the project config search never climbs out of it.
pub fn workspace() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp workspace");
    std::fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    dir
}

/// # Get intent-jsonl Command (`intent_jsonl_cmd`)
///
/// Returns an `assert_cmd::Command` for the compiled binary, running in
/// `workdir` with HOME and XDG_CONFIG_HOME pointed inside it, and with the
/// tool's environment variables cleared, so that no config from the machine
/// running the tests leaks in.
pub fn intent_jsonl_cmd(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("intent-jsonl").expect("Failed to find intent-jsonl binary");
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", workdir.join(".config"))
        .env_remove("INTENT_JSONL_INPUT")
        .env_remove("INTENT_JSONL_OUTPUT")
        .env_remove("RUST_LOG");
    cmd
}

/// Path to a file under `cli/tests/fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
