//! Testing utilities for the Checkmk and NetBox clients.
//!
//! Available when running tests or when the `test-utils` feature is enabled,
//! so the sync crate's integration tests can share the same fixtures.
//!
//! # Example
//! ```ignore
//! use cmk_sync_client::testing::{host_fixture, load_fixture};
//!
//! let folder = load_fixture("checkmk/get_folder.json");
//! let host = host_fixture("sw-ber-01", "/network/berlin", "10.0.0.5");
//! ```

use std::path::Path;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "checkmk/get_host.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let fixture_dir = manifest_dir.join("fixtures");
    let full_path = fixture_dir.join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// The `checkmk/get_host.json` fixture with name, folder and IP replaced.
pub fn host_fixture(host_name: &str, folder: &str, ipaddress: &str) -> serde_json::Value {
    let mut host = load_fixture("checkmk/get_host.json");
    host["id"] = host_name.into();
    host["title"] = host_name.into();
    host["extensions"]["folder"] = folder.into();
    host["extensions"]["attributes"]["ipaddress"] = ipaddress.into();
    host
}

/// A Checkmk RFC 7807 problem document.
pub fn problem(status: u16, title: &str, detail: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "status": status,
        "detail": detail,
    })
}
