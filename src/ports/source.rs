// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! This module defines the `ConfigSource` trait, a read-only view over loaded
//! configuration that can be refreshed from its backing storage.

use crate::domain::{ConfigKey, Result};

/// A trait for configuration sources.
///
/// Lookups on a source never fail: a key is either present or not. Only
/// [`reload`](ConfigSource::reload) touches the backing storage.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a loaded source can be shared
/// behind a lock by the caller.
///
/// # Examples
///
/// ```rust
/// use inicfg::ports::ConfigSource;
/// use inicfg::domain::{ConfigKey, Result};
///
/// struct Fixed;
///
/// impl ConfigSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn get(&self, key: &ConfigKey) -> Option<String> {
///         (key.as_str() == "app.name").then(|| "demo".to_string())
///     }
///
///     fn all_keys(&self) -> Vec<ConfigKey> {
///         vec![ConfigKey::from("app.name")]
///     }
///
///     fn reload(&mut self) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// assert_eq!(Fixed.get_str("app.name").as_deref(), Some("demo"));
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns a short identifier for logs and error messages.
    fn name(&self) -> &str;

    /// Retrieves the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &ConfigKey) -> Option<String>;

    /// Returns every key currently held by this source.
    fn all_keys(&self) -> Vec<ConfigKey>;

    /// Refreshes the source from its backing storage.
    ///
    /// Sources without backing storage can make this a no-op returning `Ok(())`.
    fn reload(&mut self) -> Result<()>;

    /// Retrieves a value by key string.
    ///
    /// Equivalent to `get(&ConfigKey::from(key))`.
    fn get_str(&self, key: &str) -> Option<String> {
        self.get(&ConfigKey::from(key))
    }
}
