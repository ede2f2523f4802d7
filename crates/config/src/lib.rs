//! Configuration management for cmk-sync.
//!
//! This crate provides types and loaders for the static, process-wide
//! configuration of the NetBox to Checkmk device sync: where the Checkmk
//! site lives, which automation credentials to use, where the NetBox API
//! lives and which folder acts as the root of the synchronized tree.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{
    AutomationCredentials, CheckmkConfig, Config, LabelTag, NetboxConfig, Scheme, TlsConfig,
};
