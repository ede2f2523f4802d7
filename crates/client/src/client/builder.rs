//! Client builder for constructing [`CheckmkClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, auth_strategy)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (default headers, timeouts, TLS trust)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`CheckmkClient`] methods)
//!
//! # Invariants
//! - `base_url` and `auth_strategy` are required fields and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - TLS verification is on unless `skip_verify` is set; `skip_verify` only
//!   affects HTTPS connections and HTTP connections log a warning

use std::path::Path;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};

use crate::auth::AuthStrategy;
use crate::client::CheckmkClient;
use crate::error::{ClientError, Result};
use cmk_sync_config::{
    CheckmkConfig, TlsConfig,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`CheckmkClient`].
///
/// # Example
///
/// ```rust,ignore
/// let client = CheckmkClient::builder()
///     .from_config(&config.checkmk)
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct CheckmkClientBuilder {
    base_url: Option<String>,
    auth_strategy: Option<AuthStrategy>,
    tls: TlsConfig,
    timeout: Duration,
}

impl Default for CheckmkClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: None,
            tls: TlsConfig::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CheckmkClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the REST API base URL, e.g. `https://monitoring.example.com/cmk/check_mk/api/1.0`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the authentication strategy.
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Set the TLS trust settings.
    ///
    /// # Security Warning
    /// `skip_verify` disables certificate verification and makes the
    /// connection vulnerable to man-in-the-middle attacks. Prefer
    /// `ca_cert_path` for sites with a private CA.
    pub fn tls(mut self, tls: TlsConfig) -> Self {
        self.tls = tls;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from the Checkmk section of the configuration.
    pub fn from_config(mut self, config: &CheckmkConfig) -> Self {
        self.base_url = Some(config.api_url());
        self.auth_strategy = Some(AuthStrategy::from(&config.credentials));
        self.tls = config.tls.clone();
        self.timeout = config.timeout;
        self
    }

    /// Build the [`CheckmkClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingSetting`] if `base_url` or `auth_strategy` was not provided.
    /// Returns [`ClientError::TlsError`] if the CA certificate cannot be loaded.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<CheckmkClient> {
        let base_url = self
            .base_url
            .ok_or(ClientError::MissingSetting("base_url"))?;
        let base_url = normalize_base_url(base_url);

        let auth_strategy = self
            .auth_strategy
            .ok_or(ClientError::MissingSetting("auth_strategy"))?;

        let http = build_http(&base_url, &auth_strategy, &self.tls, self.timeout)?;

        Ok(CheckmkClient { http, base_url })
    }
}

/// Normalize a base URL by removing trailing slashes.
///
/// - `"https://cmk.example.com/cmk/check_mk/api/1.0/"` -> `"https://cmk.example.com/cmk/check_mk/api/1.0"`
/// - `"https://netbox.example.com//"` -> `"https://netbox.example.com"`
pub(crate) fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Build the underlying HTTP client shared by both API clients.
pub(crate) fn build_http(
    base_url: &str,
    auth_strategy: &AuthStrategy,
    tls: &TlsConfig,
    timeout: Duration,
) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    let authorization = auth_strategy
        .header_value()
        .map_err(|_| ClientError::InvalidCredentials)?;
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut http_builder = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

    let is_https = base_url.starts_with("https://");

    if tls.skip_verify {
        if is_https {
            tracing::warn!(base_url = base_url, "TLS certificate verification is disabled");
            http_builder = http_builder.danger_accept_invalid_certs(true);
        } else {
            // skip_verify only affects TLS certificate verification.
            // It has no effect on HTTP connections since there is no TLS layer.
            tracing::warn!(
                "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
            );
        }
    }

    if let Some(path) = &tls.ca_cert_path {
        for cert in load_certificates(path)? {
            http_builder = http_builder.add_root_certificate(cert);
        }
    }

    Ok(http_builder.build()?)
}

/// Read every certificate in a PEM bundle. A bundle without certificates is an error.
fn load_certificates(path: &Path) -> Result<Vec<reqwest::Certificate>> {
    let pem = std::fs::read(path).map_err(|e| {
        ClientError::TlsError(format!("cannot read CA certificate {}: {}", path.display(), e))
    })?;
    let certs = reqwest::Certificate::from_pem_bundle(&pem).map_err(|e| {
        ClientError::TlsError(format!("invalid CA certificate {}: {}", path.display(), e))
    })?;
    if certs.is_empty() {
        return Err(ClientError::TlsError(format!(
            "no certificate found in CA bundle {}",
            path.display()
        )));
    }
    Ok(certs)
}
