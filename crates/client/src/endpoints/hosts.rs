//! Host configuration endpoints.
//!
//! Modifying calls require the host's current ETag as `If-Match`; Checkmk
//! answers 412 when it is stale and 428 when it is missing.

use reqwest::Client;
use reqwest::header::{ETAG, IF_MATCH};

use crate::endpoints::{encode_path_segment, send_request};
use crate::error::{ClientError, Result};
use crate::models::{
    CreateHostParams, FolderPath, HostConfig, HostObject, MoveHostBody, UpdateAttributes,
    UpdateHostBody,
};

fn host_url(base_url: &str, host_name: &str) -> String {
    format!(
        "{}/objects/host_config/{}",
        base_url,
        encode_path_segment(host_name)
    )
}

/// Fetch a host's explicit attributes together with its ETag.
pub async fn get_host(client: &Client, base_url: &str, host_name: &str) -> Result<HostConfig> {
    let url = host_url(base_url, host_name);

    let builder = client
        .get(&url)
        .query(&[("effective_attributes", "false")]);
    let response = send_request(builder, "/objects/host_config/{host}", "GET").await?;

    let etag = response
        .headers()
        .get(ETAG)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let object: HostObject = response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse host response: {}", e))
    })?;

    Ok(HostConfig::from_object(object, etag))
}

/// Create a host. Agent baking is skipped; it is not needed for SNMP/ping monitored devices.
pub async fn create_host(
    client: &Client,
    base_url: &str,
    params: &CreateHostParams,
) -> Result<u16> {
    let url = format!("{}/domain-types/host_config/collections/all", base_url);

    let builder = client
        .post(&url)
        .query(&[("bake_agent", "false")])
        .json(params);
    let response = send_request(builder, "/domain-types/host_config/collections/all", "POST").await?;

    Ok(response.status().as_u16())
}

/// Delete a host. Checkmk answers 204 on success.
pub async fn delete_host(client: &Client, base_url: &str, host_name: &str) -> Result<u16> {
    let url = host_url(base_url, host_name);

    let builder = client.delete(&url);
    let response = send_request(builder, "/objects/host_config/{host}", "DELETE").await?;

    Ok(response.status().as_u16())
}

/// Replace the host's `ipaddress` attribute, leaving all other attributes untouched.
pub async fn update_host_ip(
    client: &Client,
    base_url: &str,
    host_name: &str,
    ipaddress: &str,
    etag: &str,
) -> Result<u16> {
    let url = host_url(base_url, host_name);

    let body = UpdateHostBody {
        update_attributes: UpdateAttributes { ipaddress },
    };

    let builder = client.put(&url).header(IF_MATCH, etag).json(&body);
    let response = send_request(builder, "/objects/host_config/{host}", "PUT").await?;

    Ok(response.status().as_u16())
}

/// Move a host into `target`, which must already exist.
pub async fn move_host(
    client: &Client,
    base_url: &str,
    host_name: &str,
    target: &FolderPath,
    etag: &str,
) -> Result<u16> {
    let url = format!("{}/actions/move/invoke", host_url(base_url, host_name));

    let body = MoveHostBody {
        target_folder: tilde_form(target),
    };

    let builder = client.post(&url).header(IF_MATCH, etag).json(&body);
    let response = send_request(
        builder,
        "/objects/host_config/{host}/actions/move/invoke",
        "POST",
    )
    .await?;

    Ok(response.status().as_u16())
}

/// `~a~b` without percent-encoding, as expected inside JSON bodies.
fn tilde_form(path: &FolderPath) -> String {
    if path.is_root() {
        return "~".to_string();
    }
    path.segments().iter().map(|s| format!("~{s}")).collect()
}
