//! Shared test utilities for cmk-sync integration tests.
//!
//! Invariants / Assumptions:
//! - Commands never load a local `.env` and never see the host's CHECKMK_*/NETBOX_* variables.

use assert_cmd::Command;
use wiremock::MockServer;

/// Checkmk site used by every mocked configuration.
#[allow(dead_code)]
pub const SITE: &str = "cmk";

/// API prefix for [`SITE`].
#[allow(dead_code)]
pub const API: &str = "/cmk/check_mk/api/1.0";

/// Returns a hermetic `cmk-sync` command with no configuration at all.
pub fn cmk_sync_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cmk-sync");

    cmd.env("DOTENV_DISABLED", "1");

    for var in [
        "CHECKMK_HOST",
        "CHECKMK_SITE",
        "CHECKMK_SCHEME",
        "CHECKMK_USERNAME",
        "CHECKMK_SECRET",
        "CHECKMK_ROOT_FOLDER",
        "CHECKMK_LABEL",
        "CHECKMK_SKIP_VERIFY",
        "CHECKMK_CA_CERT",
        "CHECKMK_TIMEOUT",
        "NETBOX_URL",
        "NETBOX_TOKEN",
        "NETBOX_SKIP_VERIFY",
        "NETBOX_CA_CERT",
        "NETBOX_TIMEOUT",
        "CMK_SYNC_CONFIG_PATH",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }

    cmd
}

/// Returns a command whose Checkmk site and NetBox instance both point at `server`.
#[allow(dead_code)]
pub fn cmk_sync_cmd_for(server: &MockServer) -> Command {
    let mut cmd = cmk_sync_cmd();
    let authority = server.uri().trim_start_matches("http://").to_string();

    cmd.env("CHECKMK_HOST", authority)
        .env("CHECKMK_SCHEME", "http")
        .env("CHECKMK_SITE", SITE)
        .env("CHECKMK_USERNAME", "automation")
        .env("CHECKMK_SECRET", "test-secret")
        .env("NETBOX_URL", server.uri())
        .env("NETBOX_TOKEN", "test-token");

    cmd
}

/// Parse the outcome document a command printed.
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not a JSON document")
}
