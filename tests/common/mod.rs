// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use inicfg::service::ConfigStore;
use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `content` to a fresh temporary file.
///
/// The file is deleted when the returned handle is dropped, so keep it alive
/// for as long as the store reads from it.
#[allow(dead_code)]
pub fn config_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().expect("create temp file");
    temp_file
        .write_all(content.as_bytes())
        .expect("write temp file");
    temp_file.flush().expect("flush temp file");
    temp_file
}

/// Writes `content` to a temporary file and returns a store pointed at it.
#[allow(dead_code)]
pub fn store_for(content: &str) -> (NamedTempFile, ConfigStore) {
    let file = config_file(content);
    let store = ConfigStore::new(file.path());
    (file, store)
}

/// Installs a test subscriber so parser log events show up with `--nocapture`.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
