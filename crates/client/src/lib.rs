//! REST API clients for the NetBox to Checkmk device sync.
//!
//! This crate provides type-safe async clients for the two external systems
//! the sync talks to:
//! - [`CheckmkClient`]: the Checkmk REST API (folder and host configuration).
//! - [`NetboxClient`]: the NetBox REST API (device, site and region records).
//!
//! Every call is attempted exactly once. Non-success HTTP statuses surface as
//! [`ClientError::ApiError`] so callers can decide whether a status means
//! "absent" or "failed"; transport faults surface as [`ClientError::HttpError`].

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::AuthStrategy;
pub use client::CheckmkClient;
pub use client::builder::CheckmkClientBuilder;
pub use client::netbox::{NetboxClient, NetboxClientBuilder};
pub use error::{ClientError, Result};
pub use models::{
    CreateHostParams, Device, Folder, FolderPath, HostConfig, NestedRef, PrimaryIp, Region, Site,
};
