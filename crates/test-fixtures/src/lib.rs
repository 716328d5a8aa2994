//! Test fixture loader for recorded histories and feed captures.
//!
//! Provides typed deserialization of the fixture files under `data/` and
//! helpers for loading them in tests across crates.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a recorded history as raw totals, oldest first.
pub fn load_history(name: &str) -> Vec<u32> {
    load_fixture(&format!("histories/{name}.json"))
}

/// Load a feed capture as raw frame lines (one JSON frame per line).
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_feed_lines(name: &str) -> Vec<String> {
    let path = fixtures_root().join(format!("feed/{name}.jsonl"));
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    content.lines().map(str::to_string).collect()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}
