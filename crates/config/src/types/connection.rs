//! Connection configuration types for cmk-sync.
//!
//! Responsibilities:
//! - Define TLS trust settings shared by both remote systems.
//! - Define the main `Config` structure combining Checkmk and NetBox settings.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - `TlsConfig::default()` keeps certificate verification enabled.

use serde::Deserialize;
use std::path::PathBuf;

use crate::types::checkmk::CheckmkConfig;
use crate::types::netbox::NetboxConfig;

/// Module for deserializing Duration from seconds (integer).
pub(crate) mod duration_seconds {
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

/// TLS trust settings for an outbound HTTPS session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TlsConfig {
    /// Accept any server certificate. Off unless explicitly requested.
    #[serde(default)]
    pub skip_verify: bool,
    /// Additional PEM-encoded root certificate to trust.
    #[serde(default)]
    pub ca_cert_path: Option<PathBuf>,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Monitoring system settings.
    pub checkmk: CheckmkConfig,
    /// Inventory system settings.
    pub netbox: NetboxConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tls_default_verifies() {
        let tls = TlsConfig::default();
        assert!(!tls.skip_verify);
        assert!(tls.ca_cert_path.is_none());
    }

    #[test]
    fn test_tls_deserialize_partial() {
        let tls: TlsConfig = serde_json::from_str(r#"{"ca_cert_path": "/etc/ssl/cmk.pem"}"#).unwrap();
        assert!(!tls.skip_verify);
        assert_eq!(tls.ca_cert_path, Some(PathBuf::from("/etc/ssl/cmk.pem")));
    }
}
