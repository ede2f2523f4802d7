//! Checkmk site configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::CHECKMK_API_PATH;
use crate::types::auth::AutomationCredentials;
use crate::types::connection::TlsConfig;

/// URL scheme used to reach the Checkmk web server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Http => write!(f, "http"),
            Scheme::Https => write!(f, "https"),
        }
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Scheme::Http),
            "https" => Ok(Scheme::Https),
            other => Err(format!("must be http or https, got: {other}")),
        }
    }
}

/// A `key:value` host label attached to hosts created by the sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTag {
    pub key: String,
    pub value: String,
}

impl fmt::Display for LabelTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}

impl FromStr for LabelTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((key, value)) if !key.trim().is_empty() && !value.trim().is_empty() => {
                Ok(LabelTag {
                    key: key.trim().to_string(),
                    value: value.trim().to_string(),
                })
            }
            _ => Err(format!("must have the form key:value, got: {s}")),
        }
    }
}

/// Settings for the Checkmk REST API of a single site.
#[derive(Debug, Clone)]
pub struct CheckmkConfig {
    /// Host (and optional port) of the Checkmk web server, e.g. `monitoring.example.com:8080`.
    pub host: String,
    /// Site name, e.g. `cmk`.
    pub site: String,
    pub scheme: Scheme,
    pub credentials: AutomationCredentials,
    /// Folder under which the region/site tree is built, e.g. `/network`. `/` means the main folder.
    pub root_folder: String,
    /// Label attached to newly created hosts.
    pub label: Option<LabelTag>,
    pub tls: TlsConfig,
    pub timeout: Duration,
}

impl CheckmkConfig {
    /// Base URL of the REST API, e.g. `https://monitoring.example.com/cmk/check_mk/api/1.0`.
    pub fn api_url(&self) -> String {
        format!(
            "{}://{}/{}/{}",
            self.scheme,
            self.host.trim_end_matches('/'),
            self.site.trim_matches('/'),
            CHECKMK_API_PATH
        )
    }
}
