//! Authentication strategies for the two remote systems.

use reqwest::header::{HeaderValue, InvalidHeaderValue};
use secrecy::{ExposeSecret, SecretString};

use cmk_sync_config::AutomationCredentials;

/// Strategy for authenticating against a remote API.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Checkmk automation user: `Authorization: Bearer <username> <secret>`.
    AutomationUser {
        username: String,
        secret: SecretString,
    },
    /// NetBox API token: `Authorization: Token <token>`.
    ApiToken { token: SecretString },
}

impl AuthStrategy {
    /// Render the `Authorization` header value.
    ///
    /// The returned value is marked sensitive so it never shows up in
    /// reqwest's debug output.
    pub(crate) fn header_value(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        let raw = match self {
            AuthStrategy::AutomationUser { username, secret } => {
                format!("Bearer {} {}", username, secret.expose_secret())
            }
            AuthStrategy::ApiToken { token } => format!("Token {}", token.expose_secret()),
        };
        let mut value = HeaderValue::from_str(&raw)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl From<&AutomationCredentials> for AuthStrategy {
    fn from(creds: &AutomationCredentials) -> Self {
        AuthStrategy::AutomationUser {
            username: creds.username.clone(),
            secret: creds.secret.clone(),
        }
    }
}
