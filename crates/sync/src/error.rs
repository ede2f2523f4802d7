//! Error types for the sync layer.
//!
//! Only faults that prevent a reconciliation from running end up here.
//! Non-success statuses from Checkmk are outcomes, not errors: they are
//! logged and reported in the [`crate::Outcome`].

use cmk_sync_client::ClientError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Error, Debug)]
pub enum SyncError {
    /// Checkmk could not be reached or answered with an unreadable body.
    #[error("Checkmk request failed: {0}")]
    Monitoring(#[source] ClientError),

    /// NetBox could not be reached, rejected the request or returned an unreadable body.
    #[error("NetBox request failed: {0}")]
    Inventory(#[source] ClientError),

    /// The device's primary IPv4 assignment is not an IPv4 address.
    #[error("Device {device_id} has an invalid primary IPv4 address: {address}")]
    InvalidAddress { device_id: u64, address: String },
}

impl SyncError {
    /// True when the remote system answered, but with a non-success status.
    pub fn is_api_error(&self) -> bool {
        match self {
            Self::Monitoring(e) | Self::Inventory(e) => e.is_api_error(),
            Self::InvalidAddress { .. } => false,
        }
    }

    /// True for transport-level faults (connection, TLS, timeout).
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            Self::Monitoring(ClientError::HttpError(_)) | Self::Inventory(ClientError::HttpError(_))
        )
    }
}
