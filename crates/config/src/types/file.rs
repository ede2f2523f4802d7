//! On-disk configuration file format.
//!
//! Every field is optional so a file can carry any subset of the settings;
//! environment variables and CLI flags fill in or override the rest.

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

use crate::types::auth::secret_string;
use crate::types::connection::{TlsConfig, duration_seconds};

/// Top-level JSON configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    #[serde(default)]
    pub checkmk: CheckmkFileConfig,
    #[serde(default)]
    pub netbox: NetboxFileConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CheckmkFileConfig {
    pub host: Option<String>,
    pub site: Option<String>,
    pub scheme: Option<String>,
    pub username: Option<String>,
    #[serde(default, deserialize_with = "secret_string::deserialize")]
    pub secret: Option<SecretString>,
    pub root_folder: Option<String>,
    pub label: Option<String>,
    pub tls: Option<TlsConfig>,
    #[serde(default, rename = "timeout_seconds", deserialize_with = "duration_seconds::deserialize")]
    pub timeout: Option<Duration>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct NetboxFileConfig {
    pub url: Option<String>,
    #[serde(default, deserialize_with = "secret_string::deserialize")]
    pub token: Option<SecretString>,
    pub tls: Option<TlsConfig>,
    #[serde(default, rename = "timeout_seconds", deserialize_with = "duration_seconds::deserialize")]
    pub timeout: Option<Duration>,
}
