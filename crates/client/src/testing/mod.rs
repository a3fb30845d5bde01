//! Shared test utilities, exposed behind the `test-utils` feature so
//! integration tests (and downstream crates' tests) can load JSON fixtures
//! consistently.

use std::path::PathBuf;

/// Load a JSON fixture from `tests/fixtures/` relative to the crate root.
///
/// Panics on missing files or invalid JSON; fixtures are part of the test
/// suite and must be well-formed.
pub fn load_fixture(relative_path: &str) -> serde_json::Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative_path);
    let data = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&data)
        .unwrap_or_else(|e| panic!("invalid JSON in fixture {}: {}", path.display(), e))
}
