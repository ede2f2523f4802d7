//! Host configuration models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::FolderPath;

/// Raw host object as returned by `GET /objects/host_config/{name}`.
#[derive(Debug, Deserialize, Clone)]
pub(crate) struct HostObject {
    pub id: String,
    #[serde(default)]
    pub extensions: HostExtensions,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct HostExtensions {
    #[serde(default)]
    pub folder: FolderPath,
    #[serde(default)]
    pub attributes: HostAttributes,
}

/// The subset of explicit host attributes the sync reads and writes.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct HostAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipaddress: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

/// A monitored host as seen by the sync.
///
/// `etag` is the concurrency token from the response `ETag` header; it must
/// be sent back as `If-Match` on any modification of the host.
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub host_name: String,
    pub folder: FolderPath,
    pub ipaddress: Option<String>,
    pub etag: Option<String>,
}

impl HostConfig {
    pub(crate) fn from_object(object: HostObject, etag: Option<String>) -> Self {
        Self {
            host_name: object.id,
            folder: object.extensions.folder,
            ipaddress: object.extensions.attributes.ipaddress,
            etag,
        }
    }
}

/// Body of `POST /domain-types/host_config/collections/all`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CreateHostParams {
    pub host_name: String,
    pub folder: FolderPath,
    pub attributes: HostAttributes,
}

impl CreateHostParams {
    pub fn new(host_name: impl Into<String>, folder: FolderPath, ipaddress: impl Into<String>) -> Self {
        Self {
            host_name: host_name.into(),
            folder,
            attributes: HostAttributes {
                ipaddress: Some(ipaddress.into()),
                labels: BTreeMap::new(),
            },
        }
    }

    /// Attach a host label.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.labels.insert(key.into(), value.into());
        self
    }
}

/// Body of `PUT /objects/host_config/{name}`.
#[derive(Debug, Serialize)]
pub(crate) struct UpdateHostBody<'a> {
    pub update_attributes: UpdateAttributes<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateAttributes<'a> {
    pub ipaddress: &'a str,
}

/// Body of `POST /objects/host_config/{name}/actions/move/invoke`.
#[derive(Debug, Serialize)]
pub(crate) struct MoveHostBody {
    pub target_folder: String,
}
