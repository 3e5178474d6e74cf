// SPDX-License-Identifier: MIT OR Apache-2.0

//! A small reader for INI-style key-value configuration files.
//!
//! Files consist of `key = value` lines, optional `[section]` headers, comment
//! lines starting with `//`, `#` or `;`, and lines continued with a trailing
//! backslash. Everything is loaded into a flat map keyed by `key` or
//! `section.key`, with string values.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigError`)
//! - **Ports**: Trait definitions (`ConfigParser`, `ConfigSource`)
//! - **Adapters**: The INI line parser (`IniParser`)
//! - **Service**: The file-backed `ConfigStore`
//!
//! # Feature Flags
//!
//! - `default-location`: Resolve OS-appropriate config file locations (default)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use inicfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut store = ConfigStore::new("app.ini");
//! store.read()?;
//!
//! let port = store.get("server.port");
//! # let _ = port;
//! store.set("server.host", "localhost");
//! store.del("legacy.option");
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Only [`ConfigStore::read`](service::ConfigStore::read) can fail. A missing
//! file is an `IoError`; a line without `=` is a `ParseError`, and entries read
//! before it remain in the store.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::IniParser;
    pub use crate::domain::{ConfigError, ConfigKey, Result};
    pub use crate::ports::{ConfigParser, ConfigSource};
    pub use crate::service::ConfigStore;
}
