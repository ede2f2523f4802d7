//! Config file loading.
//!
//! Responsibilities:
//! - Read and parse the JSON config file.
//! - Apply file settings to a ConfigLoader instance.
//!
//! Invariants:
//! - File settings are applied before environment variables (env vars take precedence).
//! - A missing file is an error only when a path was given explicitly.

use std::path::Path;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::FileConfig;

/// Read the config file at `path`.
pub(crate) fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply config file values to the loader.
pub(crate) fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let path = match loader.config_path() {
        Some(path) => path.clone(),
        None => return Ok(()),
    };

    tracing::debug!(path = %path.display(), "Loading config file");
    let file = read_file(&path)?;

    let cmk = file.checkmk;
    if let Some(host) = cmk.host {
        loader.set_checkmk_host(Some(host));
    }
    if let Some(site) = cmk.site {
        loader.set_checkmk_site(Some(site));
    }
    if let Some(scheme) = cmk.scheme {
        loader.set_checkmk_scheme(Some(parse_var("checkmk.scheme", &scheme)?));
    }
    if let Some(username) = cmk.username {
        loader.set_checkmk_username(Some(username));
    }
    if let Some(secret) = cmk.secret {
        loader.set_checkmk_secret(Some(secret));
    }
    if let Some(root) = cmk.root_folder {
        loader.set_root_folder(Some(root));
    }
    if let Some(label) = cmk.label {
        loader.set_label(Some(parse_var("checkmk.label", &label)?));
    }
    if let Some(tls) = cmk.tls {
        loader.set_checkmk_skip_verify(Some(tls.skip_verify));
        if let Some(ca) = tls.ca_cert_path {
            loader.set_checkmk_ca_cert(Some(ca));
        }
    }
    if let Some(timeout) = cmk.timeout {
        loader.set_checkmk_timeout(Some(timeout));
    }

    let nb = file.netbox;
    if let Some(url) = nb.url {
        loader.set_netbox_url(Some(url));
    }
    if let Some(token) = nb.token {
        loader.set_netbox_token(Some(token));
    }
    if let Some(tls) = nb.tls {
        loader.set_netbox_skip_verify(Some(tls.skip_verify));
        if let Some(ca) = tls.ca_cert_path {
            loader.set_netbox_ca_cert(Some(ca));
        }
    }
    if let Some(timeout) = nb.timeout {
        loader.set_netbox_timeout(Some(timeout));
    }

    Ok(())
}

/// Parse a `FromStr` value, attributing failures to `var`.
pub(crate) fn parse_var<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = String>,
{
    raw.parse().map_err(|message| ConfigError::InvalidValue {
        var: var.to_string(),
        message,
    })
}
