//! # JSONL Record Serializer
//!
//! File: cli/src/common/jsonl/writer.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns an ordered slice of `IntentRecord`s into JSON Lines text: every
//! record is encoded on its own as a single-line object, and the lines are
//! joined with `\n`. There is no newline after the last record, and an empty
//! slice produces empty output.
//!
//! ## Architecture
//!
//! The whole blob is encoded in memory before anything is written, so the
//! destination sees a single write:
//! - `encode_record`: one record to one line of bytes.
//! - `to_jsonl_bytes` / `to_jsonl_string`: the joined blob.
//! - `write_jsonl`: the blob to any `io::Write` sink (stdout, a `Vec<u8>`, ...).
//! - `save_jsonl`: the blob as the complete content of a file.
//!
//! ## Examples
//!
//! ```rust,ignore
//! let options = JsonlOptions::default();
//! let text = jsonl::to_jsonl_string(&dataset.intents, &options)?;
//! let path = jsonl::save_jsonl(&dataset.intents, Path::new("out.jsonl"), &options)?;
//! ```
//!
use super::formatter::SpacedLineFormatter;
use crate::common::fs::io;
use crate::core::error::{IntentError, IntentResult};
use crate::core::intent::IntentRecord;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

const LINE_SEPARATOR: u8 = b'\n';

/// Output options for the serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonlOptions {
    /// Escape every non-ASCII character as `\uXXXX`.
    pub ascii_only: bool,
    /// Create missing parent directories of the output file before writing.
    pub create_dirs: bool,
}

impl Default for JsonlOptions {
    fn default() -> Self {
        Self {
            ascii_only: true,
            create_dirs: false,
        }
    }
}

/// Encodes a single record as one line of JSON (no trailing newline).
pub fn encode_record(record: &IntentRecord, ascii_only: bool) -> IntentResult<Vec<u8>> {
    let mut line = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut line, SpacedLineFormatter::new(ascii_only));
    record
        .serialize(&mut serializer)
        .map_err(|source| IntentError::Serialization {
            tag: record.tag.clone(),
            source,
        })?;
    trace!("Encoded intent '{}' ({} bytes)", record.tag, line.len());
    Ok(line)
}

/// Encodes all records and joins them with `\n`.
pub fn to_jsonl_bytes(records: &[IntentRecord], options: &JsonlOptions) -> IntentResult<Vec<u8>> {
    let mut blob = Vec::new();
    for (idx, record) in records.iter().enumerate() {
        if idx > 0 {
            blob.push(LINE_SEPARATOR);
        }
        blob.extend(encode_record(record, options.ascii_only)?);
    }
    debug!(
        "Serialized {} intent(s) into {} bytes of JSONL",
        records.len(),
        blob.len()
    );
    Ok(blob)
}

/// Same as `to_jsonl_bytes`, as a `String`.
pub fn to_jsonl_string(records: &[IntentRecord], options: &JsonlOptions) -> IntentResult<String> {
    let blob = to_jsonl_bytes(records, options)?;
    // serde_json only ever emits UTF-8, so this cannot fail in practice.
    String::from_utf8(blob).map_err(|e| IntentError::Serialization {
        tag: String::new(),
        source: serde::ser::Error::custom(e),
    })
}

/// Writes the JSONL blob to `sink` in one `write_all` and flushes it.
///
/// Returns the number of bytes written.
pub fn write_jsonl<W: Write>(
    records: &[IntentRecord],
    sink: &mut W,
    options: &JsonlOptions,
) -> IntentResult<usize> {
    let blob = to_jsonl_bytes(records, options)?;
    sink.write_all(&blob).map_err(IntentError::SinkWrite)?;
    sink.flush().map_err(IntentError::SinkWrite)?;
    Ok(blob.len())
}

/// Writes the JSONL blob as the complete content of `path` and returns the path.
///
/// Any existing file is replaced. Unless `options.create_dirs` is set, a
/// missing parent directory is an `IntentError::Io`.
pub fn save_jsonl(
    records: &[IntentRecord],
    path: &Path,
    options: &JsonlOptions,
) -> IntentResult<PathBuf> {
    let blob = to_jsonl_bytes(records, options)?;
    if options.create_dirs {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            io::ensure_dir_exists(parent)?;
        }
    }
    io::write_file(path, &blob)?;
    info!("Saved {} intent(s) to {}", records.len(), path.display());
    Ok(path.to_path_buf())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn greeting() -> IntentRecord {
        IntentRecord::new("greeting", ["Hi"], ["Hello!"])
    }

    fn sample_records() -> Vec<IntentRecord> {
        vec![
            IntentRecord::new("greeting", ["Hi", "Hello", "Hey"], ["Hello!", "Hi there!"]),
            IntentRecord::new("goodbye", ["Bye"], ["Goodbye!", "Take care!"]),
            IntentRecord::new(
                "testimonials",
                ["Can I read testimonials?"],
                [
                    "Read them on https://g.page/r/reviews?hl=en&x=1",
                    "A student said: \"I passed my G2 on the first try!\" ($45/hour)",
                ],
            ),
        ]
    }

    #[test]
    fn test_single_record_exact_line() {
        let text = to_jsonl_string(&[greeting()], &JsonlOptions::default()).unwrap();
        assert_eq!(
            text,
            r#"{"tag": "greeting", "patterns": ["Hi"], "responses": ["Hello!"]}"#
        );
    }

    #[test]
    fn test_two_records_one_separator() {
        let records = vec![greeting(), IntentRecord::new("goodbye", ["Bye"], ["Goodbye!"])];
        let text = to_jsonl_string(&records, &JsonlOptions::default()).unwrap();
        assert_eq!(text.matches('\n').count(), 1);
        assert!(!text.ends_with('\n'));
        assert!(!text.starts_with('\n'));
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        let text = to_jsonl_string(&[], &JsonlOptions::default()).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_lines_round_trip_in_order() {
        let records = sample_records();
        let text = to_jsonl_string(&records, &JsonlOptions::default()).unwrap();
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), records.len());
        for (line, expected) in lines.iter().zip(&records) {
            let parsed: IntentRecord = serde_json::from_str(line).unwrap();
            assert_eq!(&parsed, expected);
        }
    }

    #[test]
    fn test_output_is_deterministic() {
        let records = sample_records();
        let options = JsonlOptions::default();
        let first = to_jsonl_bytes(&records, &options).unwrap();
        let second = to_jsonl_bytes(&records, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_quotes_and_urls_survive() {
        let records = sample_records();
        let text = to_jsonl_string(&records, &JsonlOptions::default()).unwrap();
        let last = text.lines().last().unwrap();
        assert!(last.contains(r#"\"I passed my G2 on the first try!\""#));
        assert!(last.contains("https://g.page/r/reviews?hl=en&x=1"));
    }

    #[test]
    fn test_empty_lists_are_kept() {
        let record = IntentRecord::new("fallback", Vec::<String>::new(), Vec::<String>::new());
        let line = encode_record(&record, true).unwrap();
        assert_eq!(
            String::from_utf8(line).unwrap(),
            r#"{"tag": "fallback", "patterns": [], "responses": []}"#
        );
    }

    #[test]
    fn test_non_ascii_respects_option() {
        let record = IntentRecord::new("caf\u{e9}", ["Bonjour"], ["\u{1f44b}"]);
        let escaped = encode_record(&record, true).unwrap();
        let verbatim = encode_record(&record, false).unwrap();
        assert!(escaped.is_ascii());
        assert!(String::from_utf8(escaped).unwrap().contains(r#""caf\u00e9""#));
        assert!(String::from_utf8(verbatim).unwrap().contains("\"caf\u{e9}\""));
    }

    #[test]
    fn test_write_jsonl_to_memory_sink() {
        let mut sink = Vec::new();
        let written =
            write_jsonl(&sample_records(), &mut sink, &JsonlOptions::default()).unwrap();
        assert_eq!(written, sink.len());
        assert_eq!(String::from_utf8(sink).unwrap().lines().count(), 3);
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("RajputChatbotDataset.jsonl");
        std::fs::write(&path, "stale\nstale\nstale\nstale\n").unwrap();

        let saved = save_jsonl(&[greeting()], &path, &JsonlOptions::default()).unwrap();
        assert_eq!(saved, path);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"{"tag": "greeting", "patterns": ["Hi"], "responses": ["Hello!"]}"#
        );
    }

    #[test]
    fn test_save_empty_creates_zero_length_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.jsonl");
        save_jsonl(&[], &path, &JsonlOptions::default()).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out.jsonl");
        let err = save_jsonl(&[greeting()], &path, &JsonlOptions::default()).unwrap_err();
        assert!(matches!(err, IntentError::Io { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_with_create_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.jsonl");
        let options = JsonlOptions {
            create_dirs: true,
            ..JsonlOptions::default()
        };
        save_jsonl(&[greeting()], &path, &options).unwrap();
        assert!(path.is_file());
    }

    /// A sink that refuses every write.
    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_is_reported_as_io() {
        let err = write_jsonl(&[greeting()], &mut BrokenSink, &JsonlOptions::default())
            .unwrap_err();
        assert!(matches!(err, IntentError::SinkWrite(_)));
        assert!(err.is_io());
    }
}
