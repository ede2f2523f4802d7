//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Checkmk and NetBox clients.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients point at a wiremock server; the Checkmk base URL includes the
//!   site and API prefix so request paths match production paths
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use secrecy::SecretString;

#[allow(unused_imports)]
pub use cmk_sync_client::testing::{host_fixture, load_fixture, problem};

#[allow(unused_imports)]
pub use cmk_sync_client::{
    AuthStrategy, CheckmkClient, ClientError, CreateHostParams, FolderPath, NetboxClient,
};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path prefix of the Checkmk REST API for site `cmk`.
#[allow(dead_code)]
pub const API: &str = "/cmk/check_mk/api/1.0";

/// A Checkmk client authenticating as `automation` / `secret` against the mock server.
#[allow(dead_code)]
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

/// A NetBox client with token `0123abcd` against the mock server.
#[allow(dead_code)]
pub fn netbox_client(server: &MockServer) -> NetboxClient {
    NetboxClient::builder()
        .base_url(server.uri())
        .auth_strategy(AuthStrategy::ApiToken {
            token: SecretString::new("0123abcd".to_string().into()),
        })
        .build()
        .expect("client should build")
}
