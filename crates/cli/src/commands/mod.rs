//! CLI command implementations.

pub mod delete;
pub mod handle;
pub mod path;
pub mod sync;

use anyhow::{Context, Result};
use cmk_sync::{EventDispatcher, Outcome};
use cmk_sync_client::{CheckmkClient, FolderPath, NetboxClient};
use cmk_sync_config::Config;

use crate::error::ExitCode;

/// Build the dispatcher wired to the configured Checkmk site and NetBox instance.
pub fn build_dispatcher(config: &Config) -> Result<EventDispatcher<NetboxClient>> {
    let checkmk = CheckmkClient::builder()
        .from_config(&config.checkmk)
        .build()
        .context("Failed to build Checkmk client")?;
    let netbox = NetboxClient::builder()
        .from_config(&config.netbox)
        .build()
        .context("Failed to build NetBox client")?;
    let root = FolderPath::parse(&config.checkmk.root_folder);

    tracing::debug!(
        checkmk = checkmk.base_url(),
        netbox = netbox.base_url(),
        root = %root,
        "Clients ready"
    );

    Ok(EventDispatcher::new(checkmk, netbox, root).with_label(config.checkmk.label.clone()))
}

/// Write the outcome document to stdout and pick the exit code for it.
pub fn print_outcome(outcome: &Outcome) -> Result<ExitCode> {
    let rendered = serde_json::to_string_pretty(outcome).context("Failed to render outcome")?;
    println!("{}", rendered);

    if outcome.is_failure() {
        Ok(ExitCode::OutcomeFailed)
    } else {
        Ok(ExitCode::Success)
    }
}
