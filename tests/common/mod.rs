//! Common test utilities

#![allow(dead_code)]

use recman::store::Record;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary directory with a store file holding `content`
pub fn create_test_store(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("t.json");
    fs::write(&store_path, content).unwrap();
    (temp_dir, store_path)
}

/// A temporary directory and a store path inside it that does not exist yet
pub fn absent_test_store() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("t.json");
    (temp_dir, store_path)
}

/// Read the store file back as records sorted by id
pub fn read_records(path: &Path) -> Vec<Record> {
    let mut records: Vec<Record> =
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    records.sort_by(|a, b| a.id.cmp(&b.id));
    records
}
