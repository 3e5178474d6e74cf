// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! Reading a configuration file can fail in exactly two ways: the file cannot be
//! opened or read, or a logical line cannot be split into a key and a value.
//! All errors use `thiserror` for proper error handling and conversion.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for configuration operations.
///
/// Only reading can fail. Lookups and mutations on a
/// [`ConfigStore`](crate::service::ConfigStore) are total and never produce
/// a `ConfigError`. The enum is marked `#[non_exhaustive]` to allow for future
/// additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use inicfg::domain::errors::ConfigError;
///
/// fn check_line(line: &str) -> Result<(), ConfigError> {
///     Err(ConfigError::ParseError {
///         line_number: 3,
///         line: line.to_string(),
///     })
/// }
///
/// let err = check_line("justtext").unwrap_err();
/// assert!(err.to_string().contains("justtext"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file could not be opened or read.
    #[error("I/O error{}: {source}", describe_path(.path))]
    IoError {
        /// The file being read, when known
        path: Option<PathBuf>,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A logical line has no `=` separator.
    #[error("Malformed configuration line {line_number}: {line}")]
    ParseError {
        /// The physical line number that completed the logical line (1-based)
        line_number: usize,
        /// The offending logical line after continuation joining
        line: String,
    },
}

impl ConfigError {
    /// Attaches a file path to an `IoError` that does not carry one yet.
    ///
    /// Other variants are returned unchanged.
    pub fn with_path(self, file: &Path) -> Self {
        match self {
            ConfigError::IoError { path: None, source } => ConfigError::IoError {
                path: Some(file.to_path_buf()),
                source,
            },
            other => other,
        }
    }

    /// Returns `true` if this is an `IoError`.
    pub fn is_io(&self) -> bool {
        matches!(self, ConfigError::IoError { .. })
    }

    /// Returns `true` if this is a `ParseError`.
    pub fn is_parse(&self) -> bool {
        matches!(self, ConfigError::ParseError { .. })
    }
}

impl From<io::Error> for ConfigError {
    fn from(source: io::Error) -> Self {
        ConfigError::IoError { path: None, source }
    }
}

fn describe_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" on '{}'", p.display()),
        None => String::new(),
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
