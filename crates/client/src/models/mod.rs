//! Data models for Checkmk and NetBox API payloads.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod common;
pub mod folders;
pub mod hosts;
pub mod netbox;

pub use common::ProblemDetails;
pub use folders::{Folder, FolderPath};
pub use hosts::{CreateHostParams, HostAttributes, HostConfig};
pub(crate) use hosts::{HostObject, MoveHostBody, UpdateAttributes, UpdateHostBody};
pub use netbox::{Device, NestedRef, PrimaryIp, Region, Site};
