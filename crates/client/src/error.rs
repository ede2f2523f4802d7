//! Error types for the Checkmk and NetBox clients.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection refused, DNS, TLS handshake, timeout).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success API response.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body did not have the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Credentials cannot be carried in an HTTP header (control characters, non-ASCII).
    #[error("Invalid credentials: value is not a valid HTTP header")]
    InvalidCredentials,

    /// TLS/SSL configuration error.
    #[error("TLS error: {0}")]
    TlsError(String),

    /// Client construction is missing a required setting.
    #[error("Missing client setting: {0}")]
    MissingSetting(&'static str),
}

impl ClientError {
    /// HTTP status of an API error response, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the remote system answered with a non-success status.
    ///
    /// These are the outcomes the sync classifies ("absent", "failed");
    /// everything else is a fault the caller cannot act on.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::ApiError { .. })
    }
}
