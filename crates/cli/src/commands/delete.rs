//! Delete a host from Checkmk.

use anyhow::Result;
use cmk_sync_config::Config;

use crate::commands::{build_dispatcher, print_outcome};
use crate::error::ExitCode;

pub async fn run(config: &Config, name: &str, commit: bool) -> Result<ExitCode> {
    let dispatcher = build_dispatcher(config)?;
    let outcome = dispatcher.delete(name, commit).await?;
    print_outcome(&outcome)
}
