//! NetBox DCIM models.
//!
//! Only the fields the sync needs are modeled; NetBox returns many more.

use serde::Deserialize;

/// Brief nested representation NetBox embeds for related objects.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NestedRef {
    pub id: u64,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Primary IP assignment, e.g. `{"address": "10.0.0.5/24"}`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PrimaryIp {
    pub id: u64,
    pub address: String,
}

/// `GET /api/dcim/devices/{id}/`
#[derive(Debug, Deserialize, Clone)]
pub struct Device {
    pub id: u64,
    /// Devices may be unnamed in NetBox.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub primary_ip4: Option<PrimaryIp>,
    pub site: NestedRef,
}

/// `GET /api/dcim/sites/{id}/`
#[derive(Debug, Deserialize, Clone)]
pub struct Site {
    pub id: u64,
    pub slug: String,
    #[serde(default)]
    pub region: Option<NestedRef>,
}

/// `GET /api/dcim/regions/{id}/`
#[derive(Debug, Deserialize, Clone)]
pub struct Region {
    pub id: u64,
    pub slug: String,
    #[serde(default)]
    pub parent: Option<NestedRef>,
}
