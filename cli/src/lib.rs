//! # intent-jsonl
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Converts chatbot intent datasets (`{"intents": [{tag, patterns, responses}]}`)
//! into JSON Lines, one intent per line. The `intent-jsonl` binary is a thin
//! wrapper around `commands::convert`; the serializer itself lives in
//! `common::jsonl` and can write to any `std::io::Write` sink.
//!
//! ```rust
//! use intent_jsonl::common::jsonl::{self, JsonlOptions};
//! use intent_jsonl::core::intent::IntentRecord;
//!
//! let records = vec![IntentRecord::new("greeting", ["Hi"], ["Hello!"])];
//! let text = jsonl::to_jsonl_string(&records, &JsonlOptions::default()).unwrap();
//! assert_eq!(text, r#"{"tag": "greeting", "patterns": ["Hi"], "responses": ["Hello!"]}"#);
//! ```
//!
pub mod commands; // Command handlers (convert)
pub mod common; // Shared utilities (fs, jsonl)
pub mod core; // Core infrastructure (config, dataset, errors, data model)
