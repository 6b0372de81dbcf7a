//! Helpers for the pre-built datasets under `tests/fixtures/`.

use std::path::{Path, PathBuf};

/// Get the path to a test fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Contents of the sample catalog used by most integration tests.
///
/// Pages 1, 2 and 10; item 8006A and 300 have no photo; 201 and 202 share
/// a combo shot; one image is unclaimed and one row has a blank item.
pub fn sample_catalog() -> String {
    std::fs::read_to_string(fixture_path("catalog.json")).expect("sample catalog fixture missing")
}
