//! NetBox DCIM endpoints.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{Device, Region, Site};

async fn get_object<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    kind: &str,
    id: u64,
) -> Result<T> {
    let url = format!("{}/api/dcim/{}/{}/", base_url, kind, id);

    let builder = client.get(&url);
    let endpoint = format!("/api/dcim/{}/{{id}}/", kind);
    let response = send_request(builder, &endpoint, "GET").await?;

    response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse NetBox {} response: {}", kind, e))
    })
}

/// Fetch a device by id.
pub async fn get_device(client: &Client, base_url: &str, id: u64) -> Result<Device> {
    get_object(client, base_url, "devices", id).await
}

/// Fetch a site by id.
pub async fn get_site(client: &Client, base_url: &str, id: u64) -> Result<Site> {
    get_object(client, base_url, "sites", id).await
}

/// Fetch a region by id.
pub async fn get_region(client: &Client, base_url: &str, id: u64) -> Result<Region> {
    get_object(client, base_url, "regions", id).await
}
