//! Common test utilities for funcsync integration tests
//!
//! Fixtures live under `tests/fixtures/` and are loaded by file name.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use funcsync::Definition;

/// Absolute path of a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Contents of a fixture file
pub fn fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// Copy a fixture into `dir`, returning the new path
pub fn copy_fixture(dir: &Path, name: &str, as_name: &str) -> PathBuf {
    let dest = dir.join(as_name);
    fs::copy(fixture_path(name), &dest)
        .unwrap_or_else(|e| panic!("failed to copy fixture {}: {}", name, e));
    dest
}

/// Merge keys of `defs` in order
pub fn keys(defs: &[Definition]) -> Vec<String> {
    defs.iter().map(Definition::key).collect()
}

/// Assert that every needle occurs in `haystack` in the given order
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match haystack[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!("expected {:?} after offset {} in:\n{}", needle, from, haystack),
        }
    }
}
