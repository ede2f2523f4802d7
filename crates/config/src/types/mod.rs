//! Configuration type definitions for cmk-sync.
//!
//! Responsibilities:
//! - Define the runtime configuration for the Checkmk site and the NetBox API.
//! - Define the on-disk (JSON) representation of a partial configuration file.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Actual network connections or authentication headers (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - TLS verification is enabled unless a configuration explicitly opts out.

mod auth;
mod checkmk;
pub(crate) mod connection;
mod file;
mod netbox;

pub use auth::AutomationCredentials;
pub use checkmk::{CheckmkConfig, LabelTag, Scheme};
pub use connection::{Config, TlsConfig};
pub(crate) use file::FileConfig;
pub use netbox::NetboxConfig;
