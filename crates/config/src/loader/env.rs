//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse environment variables for Checkmk and NetBox configuration.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Environment variables take precedence over config file settings.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use super::file::parse_var;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: "must be true or false".to_string(),
    })
}

fn parse_secs(var: &str, raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: "must be a number".to_string(),
    })?;
    Ok(Duration::from_secs(secs))
}

/// Apply environment variable configuration to the loader.
///
/// Environment variables take precedence over config file settings.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(host) = env_var_or_none("CHECKMK_HOST") {
        loader.set_checkmk_host(Some(host));
    }
    if let Some(site) = env_var_or_none("CHECKMK_SITE") {
        loader.set_checkmk_site(Some(site));
    }
    if let Some(scheme) = env_var_or_none("CHECKMK_SCHEME") {
        loader.set_checkmk_scheme(Some(parse_var("CHECKMK_SCHEME", &scheme)?));
    }
    if let Some(username) = env_var_or_none("CHECKMK_USERNAME") {
        loader.set_checkmk_username(Some(username));
    }
    if let Some(secret) = env_var_or_none("CHECKMK_SECRET") {
        loader.set_checkmk_secret(Some(SecretString::new(secret.into())));
    }
    if let Some(root) = env_var_or_none("CHECKMK_ROOT_FOLDER") {
        loader.set_root_folder(Some(root));
    }
    if let Some(label) = env_var_or_none("CHECKMK_LABEL") {
        loader.set_label(Some(parse_var("CHECKMK_LABEL", &label)?));
    }
    if let Some(skip) = env_var_or_none("CHECKMK_SKIP_VERIFY") {
        loader.set_checkmk_skip_verify(Some(parse_bool("CHECKMK_SKIP_VERIFY", &skip)?));
    }
    if let Some(ca) = env_var_or_none("CHECKMK_CA_CERT") {
        loader.set_checkmk_ca_cert(Some(PathBuf::from(ca)));
    }
    if let Some(timeout) = env_var_or_none("CHECKMK_TIMEOUT") {
        loader.set_checkmk_timeout(Some(parse_secs("CHECKMK_TIMEOUT", &timeout)?));
    }

    if let Some(url) = env_var_or_none("NETBOX_URL") {
        loader.set_netbox_url(Some(url));
    }
    if let Some(token) = env_var_or_none("NETBOX_TOKEN") {
        loader.set_netbox_token(Some(SecretString::new(token.into())));
    }
    if let Some(skip) = env_var_or_none("NETBOX_SKIP_VERIFY") {
        loader.set_netbox_skip_verify(Some(parse_bool("NETBOX_SKIP_VERIFY", &skip)?));
    }
    if let Some(ca) = env_var_or_none("NETBOX_CA_CERT") {
        loader.set_netbox_ca_cert(Some(PathBuf::from(ca)));
    }
    if let Some(timeout) = env_var_or_none("NETBOX_TIMEOUT") {
        loader.set_netbox_timeout(Some(parse_secs("NETBOX_TIMEOUT", &timeout)?));
    }

    // Config path from environment (only if not already set via CLI)
    if loader.config_path().is_none()
        && let Some(config_path) = env_var_or_none("CMK_SYNC_CONFIG_PATH")
    {
        loader.set_config_path(Some(PathBuf::from(config_path)));
    }

    Ok(())
}
