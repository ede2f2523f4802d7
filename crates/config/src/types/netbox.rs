//! NetBox API configuration.

use secrecy::SecretString;
use std::time::Duration;

use crate::types::connection::TlsConfig;

/// Settings for the NetBox REST API used to re-fetch device records.
#[derive(Debug, Clone)]
pub struct NetboxConfig {
    /// Base URL of the NetBox instance, e.g. `https://netbox.example.com`.
    pub base_url: String,
    /// API token sent as `Authorization: Token <token>`.
    pub token: SecretString,
    pub tls: TlsConfig,
    pub timeout: Duration,
}
