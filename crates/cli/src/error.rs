//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that a hosting runner can use to distinguish failure modes.
//! - Map configuration, client and sync errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 4 means the request ran but its outcome is a failure; the
//!   outcome document on stdout says which step failed.

use cmk_sync::SyncError;
use cmk_sync_client::ClientError;
use cmk_sync_config::ConfigError;

/// Structured exit codes for cmk-sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the request was handled and nothing failed.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Configuration error - missing or invalid settings, unreadable `.env` or config file.
    ///
    /// Scripts should fix the configuration and not retry.
    ConfigError = 2,

    /// Connection error - network, TLS, timeout or DNS failure.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// Outcome failed - Checkmk or NetBox rejected a step of the request.
    OutcomeFailed = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }
            ClientError::TlsError(_) => ExitCode::ConnectionError,
            ClientError::InvalidCredentials | ClientError::MissingSetting(_) => ExitCode::ConfigError,
            ClientError::ApiError { .. } => ExitCode::OutcomeFailed,
            ClientError::InvalidResponse(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&SyncError> for ExitCode {
    fn from(err: &SyncError) -> Self {
        match err {
            SyncError::Monitoring(e) | SyncError::Inventory(e) => ExitCode::from(e),
            SyncError::InvalidAddress { .. } => ExitCode::OutcomeFailed,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error type is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ConfigError;
            }
            if let Some(sync_err) = cause.downcast_ref::<SyncError>() {
                return ExitCode::from(sync_err);
            }
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
        }

        ExitCode::GeneralError
    }
}
