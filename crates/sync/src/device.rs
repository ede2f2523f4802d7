//! Device records and the inventory seam.
//!
//! The webhook only carries a device id; placement and address are re-read
//! from the inventory so the sync always acts on current data.

use std::future::Future;
use std::net::Ipv4Addr;

use tracing::debug;

use cmk_sync_client::NetboxClient;

use crate::error::{Result, SyncError};

/// The inventory facts the sync needs about one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    pub id: u64,
    pub name: Option<String>,
    pub primary_ip4: Option<Ipv4Addr>,
    pub site_slug: String,
    pub region_slug: Option<String>,
    pub parent_region_slug: Option<String>,
}

/// Source of device records.
pub trait DeviceInventory {
    fn fetch_device(&self, id: u64) -> impl Future<Output = Result<DeviceRecord>> + Send;
}

impl DeviceInventory for NetboxClient {
    async fn fetch_device(&self, id: u64) -> Result<DeviceRecord> {
        let device = self.get_device(id).await.map_err(SyncError::Inventory)?;
        let site = self
            .get_site(device.site.id)
            .await
            .map_err(SyncError::Inventory)?;

        let (region_slug, parent_region_slug) = match &site.region {
            Some(nested) => {
                let region = self
                    .get_region(nested.id)
                    .await
                    .map_err(SyncError::Inventory)?;
                let parent = region.parent.and_then(|p| p.slug);
                (Some(region.slug), parent)
            }
            None => (None, None),
        };

        let primary_ip4 = device
            .primary_ip4
            .map(|ip| parse_ipv4(id, &ip.address))
            .transpose()?;

        debug!(
            device_id = id,
            site = %site.slug,
            region = region_slug.as_deref().unwrap_or(""),
            parent_region = parent_region_slug.as_deref().unwrap_or(""),
            "Resolved device placement"
        );

        Ok(DeviceRecord {
            id,
            name: device.name,
            primary_ip4,
            site_slug: site.slug,
            region_slug,
            parent_region_slug,
        })
    }
}

/// Parse `10.0.0.5/24` (or a bare `10.0.0.5`) into its address.
pub fn parse_ipv4(device_id: u64, address: &str) -> Result<Ipv4Addr> {
    let host = address.split_once('/').map_or(address, |(host, _)| host);
    host.trim()
        .parse()
        .map_err(|_| SyncError::InvalidAddress {
            device_id,
            address: address.to_string(),
        })
}
