//! Sync a single device by id.

use anyhow::Result;
use cmk_sync_config::Config;

use crate::commands::{build_dispatcher, print_outcome};
use crate::error::ExitCode;

pub async fn run(
    config: &Config,
    device_id: u64,
    name: Option<&str>,
    commit: bool,
) -> Result<ExitCode> {
    let dispatcher = build_dispatcher(config)?;
    let outcome = dispatcher.sync_device(device_id, name, commit).await?;
    print_outcome(&outcome)
}
