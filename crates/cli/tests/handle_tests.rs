//! Integration tests for webhook handling and the sync/delete commands.

mod common;

use cmk_sync_client::testing::{host_fixture, load_fixture};
use common::{API, cmk_sync_cmd_for, stdout_json};
use wiremock::matchers::{header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_device(server: &MockServer) {
    for (route, fixture) in [
        ("/api/dcim/devices/42/", "netbox/device.json"),
        ("/api/dcim/sites/3/", "netbox/site.json"),
        ("/api/dcim/regions/9/", "netbox/region.json"),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .and(header("Authorization", "Token test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(fixture)))
            .mount(server)
            .await;
    }
}

#[tokio::test]
async fn test_request_without_event_is_informational() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("request.json");
    std::fs::write(&input, r#"{"data": {"name": "sw-ber-01"}, "commit": false}"#).unwrap();

    let output = cmk_sync_cmd_for(&server)
        .arg("handle")
        .arg("--input")
        .arg(&input)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_json(&output)["message"],
        "This script can only be triggered by webhook."
    );
}

#[tokio::test]
async fn test_deleted_event_with_commit_flag() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{}/objects/host_config/sw-ber-01", API)))
        .and(header("Authorization", "Bearer automation test-secret"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let output = cmk_sync_cmd_for(&server)
        .args(["--commit", "handle"])
        .write_stdin(r#"{"event": "deleted", "name": "sw-ber-01"}"#)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_json(&output),
        serde_json::json!({"state": "successful", "code": 204})
    );
}

#[tokio::test]
async fn test_delete_without_commit_is_skipped() {
    let server = MockServer::start().await;

    let output = cmk_sync_cmd_for(&server)
        .args(["delete", "--name", "sw-ber-01"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["state"], "skipped");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_of_missing_host_fails() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{}/objects/host_config/sw-ber-01", API)))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(load_fixture("checkmk/problem_not_found.json")),
        )
        .mount(&server)
        .await;

    let output = cmk_sync_cmd_for(&server)
        .args(["--commit", "delete", "--name", "sw-ber-01"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(4));
    assert_eq!(
        stdout_json(&output),
        serde_json::json!({"state": "failed", "code": 404})
    );
}

#[tokio::test]
async fn test_sync_of_host_already_in_place_changes_nothing() {
    let server = MockServer::start().await;
    mount_device(&server).await;

    Mock::given(method("GET"))
        .and(path_regex(format!("^{}/objects/folder_config/.*$", API)))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("checkmk/get_folder.json")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/objects/host_config/sw-ber-01", API)))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("ETag", "\"abc\"")
                .set_body_json(host_fixture("sw-ber-01", "/network/europe/de/berlin", "10.20.0.5")),
        )
        .mount(&server)
        .await;

    let output = cmk_sync_cmd_for(&server)
        .args(["--commit", "sync", "--device-id", "42"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let report = stdout_json(&output);
    assert_eq!(report["host_name"], "sw-ber-01");
    assert_eq!(report["folder"], "/network/europe/de/berlin");
    assert_eq!(report["ipaddress"], "10.20.0.5");
    assert_eq!(report["actions"], serde_json::json!([]));

    let writes = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.method != wiremock::http::Method::GET)
        .count();
    assert_eq!(writes, 0);
}

#[tokio::test]
async fn test_updated_event_dry_run_reports_planned_create() {
    let server = MockServer::start().await;
    mount_device(&server).await;

    Mock::given(method("GET"))
        .and(path_regex(format!("^{}/objects/folder_config/.*$", API)))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("checkmk/get_folder.json")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/objects/host_config/core-sw", API)))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(load_fixture("checkmk/problem_not_found.json")),
        )
        .mount(&server)
        .await;

    let output = cmk_sync_cmd_for(&server)
        .arg("handle")
        .write_stdin(
            r#"{"data": {"event": "updated", "name": "core-sw", "data": {"id": 42}}, "commit": false}"#,
        )
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let report = stdout_json(&output);
    assert_eq!(report["host_name"], "core-sw");
    assert_eq!(report["committed"], false);
    assert_eq!(report["actions"][0]["action"], "create_host");
    assert_eq!(report["actions"][0]["status"], "dry_run");
}
