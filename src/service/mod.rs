// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration store.
//!
//! `ConfigStore` ties a file path to the INI parser and exposes the
//! get/set/add/del accessors over the loaded entries.

pub mod config_store;

// Re-export commonly used types
pub use config_store::ConfigStore;
