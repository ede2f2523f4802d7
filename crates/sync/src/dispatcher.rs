//! Webhook event routing.
//!
//! # What this module handles:
//! - Decoding a [`ScriptRequest`] into a [`WebhookEvent`]
//! - Resolving the device through the inventory and deriving its folder
//! - Running the matching reconciliation and shaping the [`Outcome`]
//!
//! # What this module does NOT handle:
//! - HTTP calls (delegated to the clients)
//! - Reading the request or printing the outcome (done by the runner)

use tracing::{Instrument, error, info, info_span, warn};

use cmk_sync_client::{CheckmkClient, FolderPath};
use cmk_sync_config::LabelTag;

use crate::device::{DeviceInventory, DeviceRecord};
use crate::error::{Result, SyncError};
use crate::event::{ScriptRequest, WebhookEvent};
use crate::path::build_path;
use crate::reconciler::HostReconciler;
use crate::report::Outcome;

/// Message returned for requests that did not come from a webhook.
pub const NOT_A_WEBHOOK: &str = "This script can only be triggered by webhook.";
/// Message returned for webhook events other than `updated` and `deleted`.
pub const UNKNOWN_ACTION: &str = "Unknown action triggered";

/// Routes webhook events to the host reconciler.
pub struct EventDispatcher<I> {
    checkmk: CheckmkClient,
    inventory: I,
    root: FolderPath,
    label: Option<LabelTag>,
}

impl<I: DeviceInventory> EventDispatcher<I> {
    pub fn new(checkmk: CheckmkClient, inventory: I, root: FolderPath) -> Self {
        Self {
            checkmk,
            inventory,
            root,
            label: None,
        }
    }

    /// Label attached to hosts created by this dispatcher.
    pub fn with_label(mut self, label: Option<LabelTag>) -> Self {
        self.label = label;
        self
    }

    /// Handle one webhook request.
    ///
    /// Transport faults are returned as errors; everything the remote
    /// systems answered is folded into the outcome.
    pub async fn handle(&self, request: &ScriptRequest) -> Result<Outcome> {
        let event = match WebhookEvent::decode(&request.data) {
            Ok(Some(event)) => event,
            Ok(None) => {
                info!("Request carries no webhook event");
                return Ok(Outcome::info(NOT_A_WEBHOOK));
            }
            Err(e) => {
                error!(outcome = "failure", error = %e, "Malformed webhook payload");
                return Ok(Outcome::failure(e.to_string()));
            }
        };

        match event {
            WebhookEvent::Updated { name, device_id } => {
                self.sync_device(device_id, Some(&name), request.commit).await
            }
            WebhookEvent::Deleted { name } => self.delete(&name, request.commit).await,
            WebhookEvent::Unknown(event) => {
                error!(event = %event, outcome = "failure", "Unknown action triggered");
                Ok(Outcome::failure(UNKNOWN_ACTION))
            }
        }
    }

    /// Bring the host for `device_id` in line with the inventory.
    ///
    /// `name` overrides the inventory's device name as the Checkmk host name.
    pub async fn sync_device(&self, device_id: u64, name: Option<&str>, commit: bool) -> Result<Outcome> {
        let device = match self.inventory.fetch_device(device_id).await {
            Ok(device) => device,
            Err(e) if e.is_api_error() => {
                error!(device_id = device_id, outcome = "failure", error = %e, "Device lookup failed");
                return Ok(Outcome::failure(format!("Device {device_id} could not be loaded: {e}")));
            }
            Err(e @ SyncError::InvalidAddress { .. }) => {
                error!(device_id = device_id, outcome = "failure", error = %e, "Device has malformed data");
                return Ok(Outcome::failure(e.to_string()));
            }
            Err(e) => return Err(e),
        };

        let Some(host_name) = name.map(str::to_string).or_else(|| device.name.clone()) else {
            error!(device_id = device_id, outcome = "failure", "Device has no name");
            return Ok(Outcome::failure(format!("Device {device_id} has no name")));
        };

        let span = info_span!("update", host = %host_name, commit = commit);
        self.update_host(&device, &host_name, commit)
            .instrument(span)
            .await
    }

    async fn update_host(&self, device: &DeviceRecord, host_name: &str, commit: bool) -> Result<Outcome> {
        let Some(ip) = device.primary_ip4 else {
            warn!(device_id = device.id, "Device has no primary IPv4 address, nothing to sync");
            return Ok(Outcome::info(format!(
                "Device {host_name} has no primary IPv4 address"
            )));
        };

        let target = build_path(
            &device.site_slug,
            device.region_slug.as_deref(),
            device.parent_region_slug.as_deref(),
            &self.root,
        );
        info!(device_id = device.id, folder = %target, ipaddress = %ip, "Syncing device");

        let report = HostReconciler::new(&self.checkmk, commit)
            .with_label(self.label.as_ref())
            .reconcile_update(host_name, &target, ip)
            .await?;
        Ok(Outcome::Update(report))
    }

    /// Delete the host `name`.
    pub async fn delete(&self, name: &str, commit: bool) -> Result<Outcome> {
        let span = info_span!("delete", host = %name, commit = commit);
        let outcome = HostReconciler::new(&self.checkmk, commit)
            .reconcile_delete(name)
            .instrument(span)
            .await?;
        Ok(Outcome::Delete(outcome))
    }
}
