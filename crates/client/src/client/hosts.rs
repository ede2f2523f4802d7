//! Host API methods for [`CheckmkClient`].
//!
//! Mutating methods return the success status code; non-success statuses
//! come back as [`crate::ClientError::ApiError`].

use crate::client::CheckmkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{CreateHostParams, FolderPath, HostConfig};

impl CheckmkClient {
    /// Fetch a host and its current ETag.
    pub async fn get_host(&self, host_name: &str) -> Result<HostConfig> {
        endpoints::get_host(&self.http, &self.base_url, host_name).await
    }

    pub async fn create_host(&self, params: &CreateHostParams) -> Result<u16> {
        endpoints::create_host(&self.http, &self.base_url, params).await
    }

    pub async fn delete_host(&self, host_name: &str) -> Result<u16> {
        endpoints::delete_host(&self.http, &self.base_url, host_name).await
    }

    /// Update the IP address of a host, guarded by `etag`.
    pub async fn update_host_ip(&self, host_name: &str, ipaddress: &str, etag: &str) -> Result<u16> {
        endpoints::update_host_ip(&self.http, &self.base_url, host_name, ipaddress, etag).await
    }

    /// Move a host into `target`, guarded by `etag`.
    pub async fn move_host(&self, host_name: &str, target: &FolderPath, etag: &str) -> Result<u16> {
        endpoints::move_host(&self.http, &self.base_url, host_name, target, etag).await
    }
}
