//! Common test utilities for sync integration tests.
//!
//! # Invariants
//! - The Checkmk client targets a wiremock server under `/cmk/check_mk/api/1.0`
//! - Unmatched requests get wiremock's default 404, which the sync reads as
//!   "absent" for lookups
//! - Call counts are asserted with `.expect(n)` and verified when the server drops

use std::collections::HashMap;
use std::net::Ipv4Addr;

use secrecy::SecretString;

#[allow(unused_imports)]
pub use cmk_sync::{
    ActionKind, ActionResult, DeleteState, DeviceInventory, DeviceRecord, EventDispatcher,
    FolderEnsurer, HostReconciler, Outcome, ScriptRequest, SyncError,
};
#[allow(unused_imports)]
pub use cmk_sync_client::testing::{host_fixture, load_fixture, problem};
#[allow(unused_imports)]
pub use cmk_sync_client::{AuthStrategy, CheckmkClient, ClientError, FolderPath};
#[allow(unused_imports)]
pub use wiremock::matchers::{body_json, header, method, path, path_regex, query_param};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API: &str = "/cmk/check_mk/api/1.0";

pub fn checkmk_client(server: &MockServer) -> CheckmkClient {
    CheckmkClient::builder()
        .base_url(format!("{}{}", server.uri(), API))
        .auth_strategy(AuthStrategy::AutomationUser {
            username: "automation".to_string(),
            secret: SecretString::new("secret".to_string().into()),
        })
        .build()
        .expect("client should build")
}

/// Answer 200 for every folder lookup on and above `path`.
#[allow(dead_code)]
pub async fn mount_existing_folders(server: &MockServer, path_str: &str) {
    for folder in FolderPath::parse(path_str).ancestors() {
        Mock::given(method("GET"))
            .and(path(format!("{API}/objects/folder_config/{}", folder.to_rest_id())))
            .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("checkmk/get_folder.json")))
            .mount(server)
            .await;
    }
}

/// Fail the test if any folder is created.
#[allow(dead_code)]
pub async fn forbid_folder_creation(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(format!("{API}/domain-types/folder_config/collections/all")))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

/// Answer a host lookup with the given folder, address and ETag.
#[allow(dead_code)]
pub async fn mount_host(server: &MockServer, name: &str, folder: &str, ip: &str, etag: &str) {
    Mock::given(method("GET"))
        .and(path(format!("{API}/objects/host_config/{name}")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("ETag", etag)
                .set_body_json(host_fixture(name, folder, ip)),
        )
        .mount(server)
        .await;
}

/// Expect exactly `n` move calls for `name`.
#[allow(dead_code)]
pub async fn expect_moves(server: &MockServer, name: &str, n: u64) {
    Mock::given(method("POST"))
        .and(path(format!("{API}/objects/host_config/{name}/actions/move/invoke")))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("checkmk/get_host.json")))
        .expect(n)
        .mount(server)
        .await;
}

/// Expect exactly `n` attribute updates for `name`.
#[allow(dead_code)]
pub async fn expect_updates(server: &MockServer, name: &str, n: u64) {
    Mock::given(method("PUT"))
        .and(path(format!("{API}/objects/host_config/{name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("checkmk/get_host.json")))
        .expect(n)
        .mount(server)
        .await;
}

/// Expect exactly `n` host creations.
#[allow(dead_code)]
pub async fn expect_creates(server: &MockServer, n: u64) {
    Mock::given(method("POST"))
        .and(path(format!("{API}/domain-types/host_config/collections/all")))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("checkmk/get_host.json")))
        .expect(n)
        .mount(server)
        .await;
}

/// In-memory device inventory.
#[derive(Default)]
#[allow(dead_code)]
pub struct StaticInventory {
    devices: HashMap<u64, DeviceRecord>,
}

#[allow(dead_code)]
impl StaticInventory {
    pub fn with(mut self, device: DeviceRecord) -> Self {
        self.devices.insert(device.id, device);
        self
    }
}

impl DeviceInventory for StaticInventory {
    async fn fetch_device(&self, id: u64) -> cmk_sync::Result<DeviceRecord> {
        self.devices.get(&id).cloned().ok_or_else(|| {
            SyncError::Inventory(ClientError::ApiError {
                status: 404,
                url: format!("http://netbox.test/api/dcim/devices/{id}/"),
                message: "Not found.".to_string(),
            })
        })
    }
}

/// A device in Berlin, region `de` below `europe`.
#[allow(dead_code)]
pub fn berlin_device(id: u64, name: &str, ip: Option<Ipv4Addr>) -> DeviceRecord {
    DeviceRecord {
        id,
        name: Some(name.to_string()),
        primary_ip4: ip,
        site_slug: "berlin".to_string(),
        region_slug: Some("de".to_string()),
        parent_region_slug: Some("europe".to_string()),
    }
}
