//! # JSONL Line Formatter
//!
//! File: cli/src/common/jsonl/formatter.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A `serde_json` formatter producing single-line JSON with a space after
//! every separator:
//!
//! ```text
//! {"tag": "greeting", "patterns": ["Hi"], "responses": ["Hello!"]}
//! ```
//!
//! `serde_json`'s own `CompactFormatter` writes `{"tag":"greeting",...}`. The
//! spaced form is what existing consumers of these dataset files expect.
//!
//! With `ascii_only` set, every character outside printable ASCII that
//! `serde_json` would otherwise emit raw (DEL and all non-ASCII) is written
//! as a `\uXXXX` escape, using UTF-16 surrogate pairs above U+FFFF. Quotes,
//! backslashes and control characters are escaped by `serde_json` itself.
//!
use serde_json::ser::Formatter;
use std::io;

/// Single-line JSON formatter with `", "` and `": "` separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpacedLineFormatter {
    ascii_only: bool,
}

impl SpacedLineFormatter {
    pub fn new(ascii_only: bool) -> Self {
        Self { ascii_only }
    }
}

impl Default for SpacedLineFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Characters that go out as `\u` escapes in ASCII-only mode.
fn needs_unicode_escape(ch: char) -> bool {
    (ch as u32) >= 0x7f
}

impl Formatter for SpacedLineFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if !self.ascii_only || !fragment.chars().any(needs_unicode_escape) {
            return writer.write_all(fragment.as_bytes());
        }

        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if !needs_unicode_escape(ch) {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
