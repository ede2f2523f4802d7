//! Checkmk REST API client and API methods.
//!
//! This module provides the primary [`CheckmkClient`] for interacting with the
//! Checkmk REST API of one site, plus the [`netbox::NetboxClient`] used to
//! re-read device records.
//!
//! # Submodules
//! - [`builder`]: Client construction and HTTP/TLS configuration
//! - `folders`: Folder lookup and creation methods
//! - `hosts`: Host lookup, creation, deletion, move and IP update methods
//! - [`netbox`]: NetBox client and its builder
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Deciding whether a non-success status means "absent" or "failed"
//!   (left to the caller)
//!
//! # Invariants
//! - Every method issues exactly one HTTP request; nothing is retried
//! - Authentication headers are installed once at build time and are marked
//!   sensitive so they never appear in debug output

pub mod builder;
pub mod netbox;

mod folders;
mod hosts;

/// Checkmk REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use cmk_sync_client::{AuthStrategy, CheckmkClient};
/// use secrecy::SecretString;
///
/// let client = CheckmkClient::builder()
///     .base_url("https://monitoring.example.com/cmk/check_mk/api/1.0".to_string())
///     .auth_strategy(AuthStrategy::AutomationUser {
///         username: "automation".to_string(),
///         secret: SecretString::new("secret".to_string().into()),
///     })
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct CheckmkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl CheckmkClient {
    /// Create a new client builder.
    pub fn builder() -> builder::CheckmkClientBuilder {
        builder::CheckmkClientBuilder::new()
    }

    /// Get the REST API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
