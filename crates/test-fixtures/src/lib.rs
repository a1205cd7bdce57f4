//! Golden hierarchy fixtures and shared test helpers.
//!
//! Every golden file describes one input column and the hierarchy a builder
//! must produce for it. Builder crates load them in their integration tests.

use std::path::PathBuf;

use genhier_core::Hierarchy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Walk up from the calling crate until a test-fixtures directory appears.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
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

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// One golden case: raw input and the expected hierarchy rows.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenHierarchy {
    pub description: String,
    pub input: Vec<String>,
    pub expected: Hierarchy,
}

impl GoldenHierarchy {
    /// Assert that `actual` matches the expected rows, reporting the first
    /// differing row.
    pub fn assert_matches(&self, actual: &Hierarchy) {
        assert_eq!(
            actual.len(),
            self.expected.len(),
            "{}: row count differs",
            self.description
        );
        for (index, (got, want)) in actual.rows().iter().zip(self.expected.rows()).enumerate() {
            assert_eq!(got, want, "{}: row {} differs", self.description, index);
        }
    }
}

pub fn load_golden(relative_path: &str) -> GoldenHierarchy {
    load_fixture(relative_path)
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Debug-level tracing for tests. Safe to call from every test.
pub fn init_tracing() {
    genhier_core::observability::init_tracing_with_filter("genhier=debug");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn every_golden_file_parses() {
        let dirs = [
            "golden/order",
            "golden/interval",
            "golden/redaction",
            "golden/priority",
            "golden/date",
        ];
        let mut total = 0;
        for dir in &dirs {
            for file in list_fixtures(dir) {
                let content = std::fs::read_to_string(&file)
                    .unwrap_or_else(|e| panic!("Failed to read {}: {}", file.display(), e));
                let golden: GoldenHierarchy = serde_json::from_str(&content)
                    .unwrap_or_else(|e| panic!("Failed to parse {}: {}", file.display(), e));
                assert_eq!(golden.input.len(), golden.expected.len(), "{}", file.display());
                for (row, raw) in golden.expected.rows().iter().zip(&golden.input) {
                    assert_eq!(&row[0], raw, "{}", file.display());
                }
                total += 1;
            }
        }
        assert!(total >= 5, "expected at least one golden file per builder");
    }
}
