//! Folder configuration endpoints.

use reqwest::Client;
use serde::Serialize;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{Folder, FolderPath};

#[derive(Debug, Serialize)]
struct CreateFolderBody<'a> {
    name: &'a str,
    title: &'a str,
    parent: String,
}

/// Fetch a folder by path.
///
/// A missing folder is reported by Checkmk as 404 and surfaces as
/// [`crate::ClientError::ApiError`].
pub async fn get_folder(client: &Client, base_url: &str, path: &FolderPath) -> Result<Folder> {
    let url = format!("{}/objects/folder_config/{}", base_url, path.to_rest_id());

    let builder = client.get(&url).query(&[("show_hosts", "false")]);
    let response = send_request(builder, "/objects/folder_config/{folder}", "GET").await?;

    response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse folder response: {}", e))
    })
}

/// Create folder `name` directly below `parent`. The folder title equals its name.
pub async fn create_folder(
    client: &Client,
    base_url: &str,
    parent: &FolderPath,
    name: &str,
) -> Result<u16> {
    let url = format!("{}/domain-types/folder_config/collections/all", base_url);

    let body = CreateFolderBody {
        name,
        title: name,
        parent: parent.to_string(),
    };

    let builder = client.post(&url).json(&body);
    let response = send_request(
        builder,
        "/domain-types/folder_config/collections/all",
        "POST",
    )
    .await?;

    Ok(response.status().as_u16())
}
