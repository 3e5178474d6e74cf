// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing parser implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer.

pub mod ini_file;

pub use ini_file::{IniParser, COMMENT_PREFIXES};
