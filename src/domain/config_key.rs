// SPDX-License-Identifier: MIT OR Apache-2.0

//! Qualified configuration key newtype.
//!
//! Entries read from a file are stored under a qualified key: the bare key for
//! entries above the first section header, or `section.key` for entries below one.
//! `ConfigKey` builds and takes apart such keys.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Separator placed between a section name and a key.
pub const SECTION_SEPARATOR: char = '.';

/// A type-safe wrapper for qualified configuration keys.
///
/// # Examples
///
/// ```
/// use inicfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::qualified(Some("database"), "host");
/// assert_eq!(key.as_str(), "database.host");
///
/// let top = ConfigKey::qualified(None, "name");
/// assert_eq!(top.as_str(), "name");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Builds the qualified key for `name` inside `section`.
    ///
    /// With no section the key is `name` unchanged.
    pub fn qualified(section: Option<&str>, name: &str) -> Self {
        match section {
            Some(section) => {
                let mut key = String::with_capacity(section.len() + 1 + name.len());
                key.push_str(section);
                key.push(SECTION_SEPARATOR);
                key.push_str(name);
                ConfigKey(key)
            }
            None => ConfigKey(name.to_string()),
        }
    }

    /// Returns the section part of the key, if any.
    ///
    /// The key is split at the first `.`. A top-level key that itself contains a
    /// dot is indistinguishable from a sectioned one, so this is best effort.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::config_key::ConfigKey;
    ///
    /// assert_eq!(ConfigKey::from("server.port").section(), Some("server"));
    /// assert_eq!(ConfigKey::from("port").section(), None);
    /// ```
    pub fn section(&self) -> Option<&str> {
        self.0
            .split_once(SECTION_SEPARATOR)
            .map(|(section, _)| section)
    }

    /// Returns the key without its section part.
    pub fn name(&self) -> &str {
        self.0
            .split_once(SECTION_SEPARATOR)
            .map_or(self.0.as_str(), |(_, name)| name)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for ConfigKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
