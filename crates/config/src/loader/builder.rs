//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from a config file, environment variables, and direct builder methods.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file parsing (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over config file values.
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{
    DEFAULT_AUTOMATION_USER, DEFAULT_CHECKMK_SITE, DEFAULT_ROOT_FOLDER,
    DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS,
};
use crate::types::{
    AutomationCredentials, CheckmkConfig, Config, LabelTag, NetboxConfig, Scheme, TlsConfig,
};

/// Configuration loader that builds config from a file, environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    checkmk_host: Option<String>,
    checkmk_site: Option<String>,
    checkmk_scheme: Option<Scheme>,
    checkmk_username: Option<String>,
    checkmk_secret: Option<SecretString>,
    root_folder: Option<String>,
    label: Option<LabelTag>,
    checkmk_skip_verify: Option<bool>,
    checkmk_ca_cert: Option<PathBuf>,
    checkmk_timeout: Option<Duration>,
    netbox_url: Option<String>,
    netbox_token: Option<SecretString>,
    netbox_skip_verify: Option<bool>,
    netbox_ca_cert: Option<PathBuf>,
    netbox_timeout: Option<Duration>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the JSON config file to read in `from_file()`.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from the config file, if a path is set.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    ///
    /// Environment variables take precedence over config file settings.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the Checkmk host (and optional port).
    pub fn with_checkmk_host(mut self, host: String) -> Self {
        self.checkmk_host = Some(host);
        self
    }

    /// Set the Checkmk site name.
    pub fn with_checkmk_site(mut self, site: String) -> Self {
        self.checkmk_site = Some(site);
        self
    }

    /// Set the root folder of the synchronized tree.
    pub fn with_root_folder(mut self, root: String) -> Self {
        self.root_folder = Some(root);
        self
    }

    /// Set the NetBox base URL.
    pub fn with_netbox_url(mut self, url: String) -> Self {
        self.netbox_url = Some(url);
        self
    }

    /// Skip TLS verification for both remote systems.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.checkmk_skip_verify = Some(skip);
        self.netbox_skip_verify = Some(skip);
        self
    }

    /// Set the request timeout for both remote systems.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.checkmk_timeout = Some(timeout);
        self.netbox_timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let host = self
            .checkmk_host
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .ok_or(ConfigError::MissingCheckmkHost)?;
        let secret = self.checkmk_secret.ok_or(ConfigError::MissingCheckmkSecret)?;
        let root_folder = validate_root_folder(
            self.root_folder
                .as_deref()
                .unwrap_or(DEFAULT_ROOT_FOLDER),
        )?;
        let checkmk = CheckmkConfig {
            host,
            site: self
                .checkmk_site
                .unwrap_or_else(|| DEFAULT_CHECKMK_SITE.to_string()),
            scheme: self.checkmk_scheme.unwrap_or(Scheme::Https),
            credentials: AutomationCredentials::new(
                self.checkmk_username
                    .unwrap_or_else(|| DEFAULT_AUTOMATION_USER.to_string()),
                secret,
            ),
            root_folder,
            label: self.label,
            tls: TlsConfig {
                skip_verify: self.checkmk_skip_verify.unwrap_or(false),
                ca_cert_path: self.checkmk_ca_cert,
            },
            timeout: validate_timeout(
                "checkmk.timeout",
                self.checkmk_timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            )?,
        };

        let base_url = self
            .netbox_url
            .as_deref()
            .map(validate_and_normalize_base_url)
            .transpose()?
            .ok_or(ConfigError::MissingNetboxUrl)?;
        let token = self.netbox_token.ok_or(ConfigError::MissingNetboxToken)?;

        let netbox = NetboxConfig {
            base_url,
            token,
            tls: TlsConfig {
                skip_verify: self.netbox_skip_verify.unwrap_or(false),
                ca_cert_path: self.netbox_ca_cert,
            },
            timeout: validate_timeout(
                "netbox.timeout",
                self.netbox_timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            )?,
        };

        Ok(Config { checkmk, netbox })
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn set_checkmk_host(&mut self, host: Option<String>) {
        self.checkmk_host = host;
    }

    pub(crate) fn set_checkmk_site(&mut self, site: Option<String>) {
        self.checkmk_site = site;
    }

    pub(crate) fn set_checkmk_scheme(&mut self, scheme: Option<Scheme>) {
        self.checkmk_scheme = scheme;
    }

    pub(crate) fn set_checkmk_username(&mut self, username: Option<String>) {
        self.checkmk_username = username;
    }

    pub(crate) fn set_checkmk_secret(&mut self, secret: Option<SecretString>) {
        self.checkmk_secret = secret;
    }

    pub(crate) fn set_root_folder(&mut self, root: Option<String>) {
        self.root_folder = root;
    }

    pub(crate) fn set_label(&mut self, label: Option<LabelTag>) {
        self.label = label;
    }

    pub(crate) fn set_checkmk_skip_verify(&mut self, skip: Option<bool>) {
        self.checkmk_skip_verify = skip;
    }

    pub(crate) fn set_checkmk_ca_cert(&mut self, path: Option<PathBuf>) {
        self.checkmk_ca_cert = path;
    }

    pub(crate) fn set_checkmk_timeout(&mut self, timeout: Option<Duration>) {
        self.checkmk_timeout = timeout;
    }

    pub(crate) fn set_netbox_url(&mut self, url: Option<String>) {
        self.netbox_url = url;
    }

    pub(crate) fn set_netbox_token(&mut self, token: Option<SecretString>) {
        self.netbox_token = token;
    }

    pub(crate) fn set_netbox_skip_verify(&mut self, skip: Option<bool>) {
        self.netbox_skip_verify = skip;
    }

    pub(crate) fn set_netbox_ca_cert(&mut self, path: Option<PathBuf>) {
        self.netbox_ca_cert = path;
    }

    pub(crate) fn set_netbox_timeout(&mut self, timeout: Option<Duration>) {
        self.netbox_timeout = timeout;
    }
}

/// Root folder must be absolute in the Checkmk folder namespace.
fn validate_root_folder(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('/') {
        return Err(ConfigError::InvalidValue {
            var: "checkmk.root_folder".into(),
            message: format!("must start with '/' (e.g. /network), got: {trimmed}"),
        });
    }
    Ok(trimmed.to_string())
}

fn validate_timeout(var: &str, timeout: Duration) -> Result<Duration, ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            var: var.to_string(),
            message: "timeout must be greater than 0 seconds".to_string(),
        });
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            var: var.to_string(),
            message: format!(
                "timeout exceeds maximum allowed value of {} seconds",
                MAX_TIMEOUT_SECS
            ),
        });
    }
    Ok(timeout)
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Treat blank/whitespace-only as missing
/// - Parse as an absolute URL with http or https scheme and a host
/// - Normalize by stripping trailing slash
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingNetboxUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "netbox.url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://netbox.example.com): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "netbox.url".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "netbox.url".into(),
            message: "host is required (e.g. https://netbox.example.com)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
