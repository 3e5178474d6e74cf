// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module defines the qualified key type and the error type shared by the
//! parser and the store. It has no knowledge of files or parsing.

pub mod config_key;
pub mod errors;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use errors::{ConfigError, Result};
