//! NetBox REST API client.
//!
//! Only the DCIM reads needed to rebuild a device's placement are exposed:
//! device, site and region by id.

use std::time::Duration;

use crate::auth::AuthStrategy;
use crate::client::builder::{build_http, normalize_base_url};
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{Device, Region, Site};
use cmk_sync_config::{NetboxConfig, TlsConfig, constants::DEFAULT_TIMEOUT_SECS};

/// NetBox REST API client.
#[derive(Debug, Clone)]
pub struct NetboxClient {
    http: reqwest::Client,
    base_url: String,
}

impl NetboxClient {
    pub fn builder() -> NetboxClientBuilder {
        NetboxClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_device(&self, id: u64) -> Result<Device> {
        endpoints::get_device(&self.http, &self.base_url, id).await
    }

    pub async fn get_site(&self, id: u64) -> Result<Site> {
        endpoints::get_site(&self.http, &self.base_url, id).await
    }

    pub async fn get_region(&self, id: u64) -> Result<Region> {
        endpoints::get_region(&self.http, &self.base_url, id).await
    }
}

/// Builder for [`NetboxClient`]. Mirrors [`crate::CheckmkClientBuilder`].
pub struct NetboxClientBuilder {
    base_url: Option<String>,
    auth_strategy: Option<AuthStrategy>,
    tls: TlsConfig,
    timeout: Duration,
}

impl Default for NetboxClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: None,
            tls: TlsConfig::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl NetboxClientBuilder {
    /// Set the NetBox base URL, e.g. `https://netbox.example.com`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    pub fn tls(mut self, tls: TlsConfig) -> Self {
        self.tls = tls;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_config(mut self, config: &NetboxConfig) -> Self {
        self.base_url = Some(config.base_url.clone());
        self.auth_strategy = Some(AuthStrategy::ApiToken {
            token: config.token.clone(),
        });
        self.tls = config.tls.clone();
        self.timeout = config.timeout;
        self
    }

    pub fn build(self) -> Result<NetboxClient> {
        let base_url = self
            .base_url
            .ok_or(ClientError::MissingSetting("base_url"))?;
        let base_url = normalize_base_url(base_url);

        let auth_strategy = self
            .auth_strategy
            .ok_or(ClientError::MissingSetting("auth_strategy"))?;

        let http = build_http(&base_url, &auth_strategy, &self.tls, self.timeout)?;

        Ok(NetboxClient { http, base_url })
    }
}
