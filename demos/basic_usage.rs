// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the inicfg crate.
//!
//! This example demonstrates:
//! - Reading an INI file with sections, comments and continued lines
//! - Looking up top-level and sectioned keys
//! - Changing entries in memory with `set`, `add` and `del`
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use inicfg::prelude::*;

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/sample.ini");

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== inicfg: Basic Usage ===\n");

    let mut store = ConfigStore::new(SAMPLE);
    store.read()?;
    println!(
        "Loaded {} entries from {}\n",
        store.len(),
        store.filename().display()
    );

    // Example 1: Top-level and sectioned keys
    println!("--- Example 1: Lookups ---");
    println!("app_name      = {}", store.get("app_name"));
    println!("database.host = {}", store.get("database.host"));
    println!("database.url  = {}", store.get("database.url"));
    println!("server.port   = {}", store.get("server.port"));

    // Example 2: Absent keys read as the empty string
    println!("\n--- Example 2: Absent Keys ---");
    let missing = store.get("server.tls");
    if missing.is_empty() {
        println!("✗ server.tls not set, falling back to \"off\"");
    }

    // Example 3: In-memory changes
    println!("\n--- Example 3: Set, Add and Del ---");
    store.set("server.port", "9090");
    store.add("server.tls", "on");
    store.del("database.url");
    println!("server.port   = {}", store.get("server.port"));
    println!("server.tls    = {}", store.get("server.tls"));
    println!("database.url present: {}", store.contains_key("database.url"));

    // Writing back is not supported; the file on disk is left as it was
    store.write();

    println!("\n--- All entries ---");
    let mut entries: Vec<(&str, &str)> = store.iter().collect();
    entries.sort_unstable();
    for (key, value) in entries {
        println!("{key} = {value}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
