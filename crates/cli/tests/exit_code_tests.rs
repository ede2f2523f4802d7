//! Integration tests for structured exit codes.

mod common;

use common::{cmk_sync_cmd, cmk_sync_cmd_for};
use predicates::prelude::*;
use wiremock::MockServer;

#[test]
fn test_missing_configuration_returns_exit_code_2() {
    cmk_sync_cmd()
        .args(["delete", "--name", "sw-ber-01"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("CHECKMK_HOST"));
}

#[test]
fn test_missing_netbox_token_returns_exit_code_2() {
    cmk_sync_cmd()
        .env("CHECKMK_HOST", "monitoring.example.com")
        .env("CHECKMK_SECRET", "secret")
        .env("NETBOX_URL", "https://netbox.example.com")
        .args(["delete", "--name", "sw-ber-01"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("NETBOX_TOKEN"));
}

#[test]
fn test_unreadable_config_file_returns_exit_code_2() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");

    cmk_sync_cmd()
        .arg("--config-path")
        .arg(&missing)
        .args(["delete", "--name", "sw-ber-01"])
        .assert()
        .code(2);
}

#[test]
fn test_invalid_label_returns_exit_code_2() {
    cmk_sync_cmd()
        .env("CHECKMK_LABEL", "no-separator")
        .args(["delete", "--name", "sw-ber-01"])
        .assert()
        .code(2);
}

#[tokio::test]
async fn test_unknown_event_returns_exit_code_4() {
    let server = MockServer::start().await;

    let output = cmk_sync_cmd_for(&server)
        .args(["handle"])
        .write_stdin(r#"{"data": {"event": "renamed", "name": "sw-ber-01"}, "commit": true}"#)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(4));
    let outcome = common::stdout_json(&output);
    assert_eq!(outcome["message"], "Unknown action triggered");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[test]
fn test_connection_refused_returns_exit_code_3() {
    cmk_sync_cmd()
        .env("CHECKMK_HOST", "127.0.0.1:1")
        .env("CHECKMK_SCHEME", "http")
        .env("CHECKMK_SECRET", "secret")
        .env("NETBOX_URL", "http://127.0.0.1:1")
        .env("NETBOX_TOKEN", "token")
        .args(["--commit", "delete", "--name", "sw-ber-01"])
        .assert()
        .code(3);
}

#[test]
fn test_relative_root_folder_flag_returns_exit_code_2() {
    cmk_sync_cmd()
        .env("CHECKMK_HOST", "monitoring.example.com")
        .env("CHECKMK_SECRET", "secret")
        .env("NETBOX_URL", "https://netbox.example.com")
        .env("NETBOX_TOKEN", "token")
        .args(["--root-folder", "network", "delete", "--name", "sw-ber-01"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("checkmk.root_folder"));
}

#[test]
fn test_zero_timeout_flag_returns_exit_code_2() {
    cmk_sync_cmd()
        .env("CHECKMK_HOST", "monitoring.example.com")
        .env("CHECKMK_SECRET", "secret")
        .env("NETBOX_URL", "https://netbox.example.com")
        .env("NETBOX_TOKEN", "token")
        .args(["--timeout", "0", "delete", "--name", "sw-ber-01"])
        .assert()
        .code(2);
}
