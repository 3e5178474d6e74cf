// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed configuration store.
//!
//! `ConfigStore` owns the path of an INI-style file and the flat map of entries
//! loaded from it. Reading merges into the map; lookups never fail.

use crate::adapters::IniParser;
use crate::domain::{ConfigError, ConfigKey, Result};
use crate::ports::{ConfigParser, ConfigSource};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// An in-memory view of one configuration file.
///
/// Entries are keyed by qualified key (`key` or `section.key`). Values are plain
/// strings; a lookup of an absent key returns the empty string.
///
/// # Concurrency
///
/// The store does no internal locking. It is `Send + Sync`, and mutation goes
/// through `&mut self`, so sharing it across threads requires a lock chosen by
/// the caller (for example `Arc<RwLock<ConfigStore>>`).
///
/// # Examples
///
/// ```rust,no_run
/// use inicfg::service::ConfigStore;
///
/// # fn main() -> inicfg::domain::Result<()> {
/// let mut store = ConfigStore::new("/etc/myapp/app.ini");
/// store.read()?;
///
/// let host = store.get("database.host");
/// let missing = store.get("no.such.key");
/// assert_eq!(missing, "");
/// # let _ = host;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigStore {
    /// Path to the backing file
    filename: PathBuf,
    /// Loaded entries keyed by qualified key
    entries: HashMap<String, String>,
    /// Parser used by `read`
    parser: IniParser,
}

impl ConfigStore {
    /// Creates an empty store for `filename`. No I/O is performed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inicfg::service::ConfigStore;
    ///
    /// let store = ConfigStore::new("app.ini");
    /// assert!(store.is_empty());
    /// assert_eq!(store.filename().to_str(), Some("app.ini"));
    /// ```
    pub fn new<P: AsRef<Path>>(filename: P) -> Self {
        Self {
            filename: filename.as_ref().to_path_buf(),
            entries: HashMap::new(),
            parser: IniParser::new(),
        }
    }

    /// Creates an empty store for `config.ini` in the OS-appropriate
    /// configuration directory of the application.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use inicfg::service::ConfigStore;
    ///
    /// let mut store = ConfigStore::from_default_location("myapp", "com.example").unwrap();
    /// store.read().unwrap();
    /// ```
    #[cfg(feature = "default-location")]
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "config.ini")
    }

    /// Creates an empty store for `filename` in the OS-appropriate configuration
    /// directory of the application.
    ///
    /// Fails with an `IoError` of kind `NotFound` when no home directory can be
    /// determined.
    #[cfg(feature = "default-location")]
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        use directories::ProjectDirs;
        use std::io;

        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Failed to determine project directories",
            )
        })?;

        Ok(Self::new(proj_dirs.config_dir().join(filename)))
    }

    /// Returns the path of the backing file.
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Reads the backing file and merges its entries into the store.
    ///
    /// Keys already present and not mentioned in the file are kept. On a
    /// `ParseError` the entries committed before the malformed line stay in the
    /// store; nothing is rolled back.
    ///
    /// # Errors
    ///
    /// * `ConfigError::IoError` if the file cannot be opened or read
    /// * `ConfigError::ParseError` if a logical line has no `=`
    pub fn read(&mut self) -> Result<()> {
        tracing::debug!("Reading configuration file '{}'", self.filename.display());

        let file = File::open(&self.filename).map_err(|e| {
            tracing::debug!(
                "Failed to open configuration file '{}': {}",
                self.filename.display(),
                e
            );
            ConfigError::from(e).with_path(&self.filename)
        })?;

        let mut reader = BufReader::new(file);
        self.read_from(&mut reader)
            .map_err(|e| e.with_path(&self.filename))
    }

    /// Parses entries from any buffered reader and merges them into the store.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inicfg::service::ConfigStore;
    ///
    /// let mut store = ConfigStore::new("unused.ini");
    /// store.read_from(&mut "[sec]\na = 1".as_bytes()).unwrap();
    /// assert_eq!(store.get("sec.a"), "1");
    /// ```
    pub fn read_from<R: BufRead>(&mut self, reader: &mut R) -> Result<()> {
        let before = self.entries.len();
        self.parser.parse_into(reader, &mut self.entries)?;
        tracing::debug!(
            "Loaded configuration: {} entries ({} new)",
            self.entries.len(),
            self.entries.len() - before
        );
        Ok(())
    }

    /// Returns the value stored under `key`, or `""` if the key is absent.
    pub fn get<K: AsRef<str>>(&self, key: K) -> &str {
        self.entries
            .get(key.as_ref())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.entries.insert(key.into(), value.into());
    }

    /// Stores `value` under `key`.
    ///
    /// Identical to [`set`](ConfigStore::set): an existing value is replaced.
    pub fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.set(key, value);
    }

    /// Removes `key` if present.
    pub fn del<K: AsRef<str>>(&mut self, key: K) {
        self.entries.remove(key.as_ref());
    }

    /// Does nothing. Persisting entries back to disk is not supported; the
    /// backing file is never modified.
    pub fn write(&self) {
        tracing::debug!(
            "Writing configuration is not supported; '{}' left unchanged",
            self.filename.display()
        );
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<K: AsRef<str>>(&self, key: K) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all qualified keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl ConfigSource for ConfigStore {
    fn name(&self) -> &str {
        "ini-file"
    }

    fn get(&self, key: &ConfigKey) -> Option<String> {
        self.entries.get(key.as_str()).cloned()
    }

    fn all_keys(&self) -> Vec<ConfigKey> {
        self.entries
            .keys()
            .map(|k| ConfigKey::from(k.as_str()))
            .collect()
    }

    /// Replaces the entries with a fresh read of the backing file.
    ///
    /// Unlike [`ConfigStore::read`], keys missing from the file are dropped.
    fn reload(&mut self) -> Result<()> {
        self.clear();
        self.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn store_with(content: &str) -> (NamedTempFile, ConfigStore) {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        let store = ConfigStore::new(temp_file.path());
        (temp_file, store)
    }

    #[test]
    fn test_new_performs_no_io() {
        let store = ConfigStore::new("/nonexistent/path/app.ini");
        assert!(store.is_empty());
        assert_eq!(store.filename(), Path::new("/nonexistent/path/app.ini"));
    }

    #[test]
    fn test_read_end_to_end() {
        let (_file, mut store) = store_with("top = 1\n[sec]\na = x \\\ny\n# skip\nb=2\n");
        store.read().unwrap();

        assert_eq!(store.get("top"), "1");
        assert_eq!(store.get("sec.a"), "xy");
        assert_eq!(store.get("sec.b"), "2");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let mut store = ConfigStore::new("/nonexistent/path/to/config.ini");
        let err = store.read().unwrap_err();
        match err {
            ConfigError::IoError { path, source } => {
                assert_eq!(path.as_deref(), Some(store.filename()));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_read_parse_error_keeps_partial_entries() {
        let (_file, mut store) = store_with("a = 1\njusttext\nb = 2\n");
        let err = store.read().unwrap_err();

        assert!(matches!(err, ConfigError::ParseError { line_number: 2, .. }));
        assert_eq!(store.get("a"), "1");
        assert_eq!(store.get("b"), "");
    }

    #[test]
    fn test_read_merges_into_existing_entries() {
        let (file, mut store) = store_with("a = 1\nb = 2\n");
        store.read().unwrap();
        store.set("manual", "kept");

        fs::write(file.path(), "a = 10\n").unwrap();
        store.read().unwrap();

        assert_eq!(store.get("a"), "10");
        assert_eq!(store.get("b"), "2");
        assert_eq!(store.get("manual"), "kept");
    }

    #[test]
    fn test_reload_replaces_entries() {
        let (file, mut store) = store_with("a = 1\nb = 2\n");
        store.read().unwrap();

        fs::write(file.path(), "a = 10\n").unwrap();
        ConfigSource::reload(&mut store).unwrap();

        assert_eq!(store.get("a"), "10");
        assert!(!store.contains_key("b"));
    }

    #[test]
    fn test_get_absent_is_empty_string() {
        let store = ConfigStore::new("unused.ini");
        assert_eq!(store.get("missing"), "");
    }

    #[test]
    fn test_set_add_del() {
        let mut store = ConfigStore::new("unused.ini");
        store.set("k", "1");
        assert_eq!(store.get("k"), "1");

        store.add("k", "2");
        assert_eq!(store.get("k"), "2");

        store.del("k");
        assert_eq!(store.get("k"), "");
        assert!(!store.contains_key("k"));

        store.del("k");
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_accepts_config_key() {
        let mut store = ConfigStore::new("unused.ini");
        store.set(ConfigKey::qualified(Some("db"), "host"), "localhost");
        assert_eq!(store.get(ConfigKey::from("db.host")), "localhost");
        assert_eq!(store.get("db.host"), "localhost");
    }

    #[test]
    fn test_write_leaves_file_untouched() {
        let content = "a = 1\n";
        let (file, mut store) = store_with(content);
        store.read().unwrap();
        store.set("b", "2");
        store.write();

        assert_eq!(fs::read_to_string(file.path()).unwrap(), content);
    }

    #[test]
    fn test_iteration() {
        let mut store = ConfigStore::new("unused.ini");
        store.set("a", "1");
        store.set("s.b", "2");

        let mut keys: Vec<&str> = store.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["a", "s.b"]);

        let mut pairs: Vec<(&str, &str)> = store.iter().collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![("a", "1"), ("s.b", "2")]);

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_config_source_impl() {
        let (_file, mut store) = store_with("[app]\nname = demo\n");
        store.read().unwrap();

        let source: &dyn ConfigSource = &store;
        assert_eq!(source.name(), "ini-file");
        assert_eq!(source.get_str("app.name").as_deref(), Some("demo"));
        assert_eq!(source.get_str("app.other"), None);
        assert_eq!(source.all_keys(), vec![ConfigKey::from("app.name")]);
    }

    #[cfg(feature = "default-location")]
    #[test]
    fn test_with_filename_uses_requested_name() {
        // Environments without a home directory cannot resolve a location
        if let Ok(store) = ConfigStore::with_filename("inicfg-test", "com.example", "app.ini") {
            assert!(store.filename().ends_with("app.ini"));
            assert!(store.is_empty());
        }
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigStore>();
    }
}
