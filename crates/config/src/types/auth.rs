//! Authentication types for cmk-sync configuration.
//!
//! Responsibilities:
//! - Define the Checkmk automation credential pair.
//! - Provide deserialization of secret values from configuration files.
//!
//! Does NOT handle:
//! - Rendering authorization headers (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.

use secrecy::SecretString;

/// Module for deserializing SecretString from plain strings.
pub(crate) mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| SecretString::new(s.into())))
    }
}

/// Checkmk automation user credentials.
///
/// Sent once per session as `Authorization: Bearer <username> <secret>`.
#[derive(Debug, Clone)]
pub struct AutomationCredentials {
    /// Automation user name.
    pub username: String,
    /// Automation secret.
    pub secret: SecretString,
}

impl AutomationCredentials {
    pub fn new(username: impl Into<String>, secret: SecretString) -> Self {
        Self {
            username: username.into(),
            secret,
        }
    }
}
