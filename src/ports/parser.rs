// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which turns a stream of lines
//! into a flat key-value map.

use crate::domain::Result;
use std::collections::HashMap;
use std::io::BufRead;

/// A trait for parsing configuration streams.
///
/// Parsers write into a caller-owned map so that entries committed before a
/// failure stay in place. Nested structures are flattened with dot notation:
///
/// ```text
/// [database]
/// host = localhost
/// ```
///
/// becomes `database.host` -> `"localhost"`.
///
/// # Examples
///
/// ```rust
/// use inicfg::ports::ConfigParser;
/// use inicfg::domain::Result;
/// use std::collections::HashMap;
/// use std::io::BufRead;
///
/// struct LineCounter;
///
/// impl ConfigParser for LineCounter {
///     fn parse_into(
///         &self,
///         reader: &mut dyn BufRead,
///         entries: &mut HashMap<String, String>,
///     ) -> Result<()> {
///         let count = reader.lines().count();
///         entries.insert("lines".to_string(), count.to_string());
///         Ok(())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["txt"]
///     }
/// }
///
/// let map = LineCounter.parse("a\nb\n").unwrap();
/// assert_eq!(map.get("lines"), Some(&"2".to_string()));
/// ```
pub trait ConfigParser {
    /// Parses every line of `reader` into `entries`.
    ///
    /// Existing entries are kept; parsed keys overwrite them. On error the
    /// entries committed so far remain in the map.
    fn parse_into(
        &self,
        reader: &mut dyn BufRead,
        entries: &mut HashMap<String, String>,
    ) -> Result<()>;

    /// Returns the file extensions (without the leading dot) this parser handles.
    fn supported_extensions(&self) -> &[&str];

    /// Parses configuration content into a fresh map.
    fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
        let mut entries = HashMap::new();
        let mut reader = content.as_bytes();
        self.parse_into(&mut reader, &mut entries)?;
        Ok(entries)
    }
}
