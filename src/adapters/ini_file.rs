// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI-style configuration parser.
//!
//! The format is line oriented:
//!
//! ```text
//! top = 1
//! [section_name]
//! key = value
//! key2 = part1 \
//!        part2
//! // comment
//! # comment
//! ; comment
//! ```
//!
//! A trailing backslash joins a physical line with the next one. The backslash and
//! any whitespace right before it are dropped and no separator is inserted, so
//! `a = 1 \` followed by `2` reads as `a = 12`. Keys below a section header are
//! stored as `section.key`.

use crate::domain::{ConfigError, ConfigKey, Result};
use crate::ports::ConfigParser;
use std::borrow::Cow;
use std::collections::HashMap;
use std::io::BufRead;

/// Prefixes that mark a whole line as a comment once leading whitespace is trimmed.
pub const COMMENT_PREFIXES: [&str; 3] = ["//", "#", ";"];

/// Marks a physical line as continued on the next one.
const CONTINUATION: char = '\\';

/// Parser for INI-like files with sections, comments and line continuation.
///
/// # Examples
///
/// ```rust
/// use inicfg::adapters::IniParser;
/// use inicfg::ports::ConfigParser;
///
/// let content = "top = 1\n[sec]\na = x \\\ny\n# skip\nb=2\n";
/// let entries = IniParser::new().parse(content).unwrap();
///
/// assert_eq!(entries.get("top"), Some(&"1".to_string()));
/// assert_eq!(entries.get("sec.a"), Some(&"xy".to_string()));
/// assert_eq!(entries.get("sec.b"), Some(&"2".to_string()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IniParser;

impl IniParser {
    /// Creates a new INI parser.
    pub fn new() -> Self {
        IniParser
    }
}

impl ConfigParser for IniParser {
    fn parse_into(
        &self,
        reader: &mut dyn BufRead,
        entries: &mut HashMap<String, String>,
    ) -> Result<()> {
        let mut state = ParseState::default();
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            let line = decode_line(&buf);
            if let Some((key, value)) = state.feed(&line, line_number)? {
                tracing::trace!("Committed configuration key '{}'", key);
                entries.insert(key.into_string(), value);
            }
        }

        if !state.pending.is_empty() {
            tracing::warn!(
                "Discarding unterminated continuation line at end of input: {}",
                state.pending
            );
        }
        Ok(())
    }

    fn supported_extensions(&self) -> &[&str] {
        &["ini", "conf", "cfg"]
    }
}

/// Transient state for one pass over an input stream.
#[derive(Debug, Default)]
struct ParseState {
    /// Section that prefixes committed keys; `None` above the first header
    section: Option<String>,
    /// Logical line assembled so far from continued physical lines
    pending: String,
}

impl ParseState {
    /// Feeds one physical line (terminator already stripped).
    ///
    /// Returns the qualified key and value when the line completes an entry.
    fn feed(&mut self, line: &str, line_number: usize) -> Result<Option<(ConfigKey, String)>> {
        // Blank lines never touch the pending buffer
        if line.is_empty() {
            return Ok(None);
        }

        if self.pending.is_empty() {
            if let Some(name) = section_name(line) {
                tracing::trace!("Entering configuration section '{}'", name);
                self.section = Some(name.to_string());
                return Ok(None);
            }
        }

        if is_comment(line) {
            return Ok(None);
        }

        self.pending.push_str(line);
        if let Some(joined) = self.pending.strip_suffix(CONTINUATION) {
            // Whitespace before the backslash goes with it, unless it is all
            // that was buffered
            let trimmed = joined.trim_end().len();
            let keep = if trimmed == 0 { joined.len() } else { trimmed };
            self.pending.truncate(keep);
            return Ok(None);
        }

        let (key, value) = split_entry(&self.pending).ok_or_else(|| ConfigError::ParseError {
            line_number,
            line: self.pending.clone(),
        })?;
        let entry = (
            ConfigKey::qualified(self.section.as_deref(), key),
            value.to_string(),
        );
        self.pending.clear();
        Ok(Some(entry))
    }
}

/// Strips the `\n` or `\r\n` terminator from a raw line and decodes it.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}

/// Returns the section name if `line` is a `[name]` header.
///
/// The brackets are matched on the trimmed line; the name between them is kept
/// as written. `[]` is not a header.
fn section_name(line: &str) -> Option<&str> {
    let name = line.trim().strip_prefix('[')?.strip_suffix(']')?;
    (!name.is_empty()).then_some(name)
}

fn is_comment(line: &str) -> bool {
    let line = line.trim();
    COMMENT_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
}

/// Splits a logical line on its first `=` into a trimmed key and value.
fn split_entry(line: &str) -> Option<(&str, &str)> {
    line.split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
}
