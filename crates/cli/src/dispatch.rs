//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Load configuration only for commands that reach a remote system.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//!
//! Invariants:
//! - `path` never touches configuration or the network.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::config_context::load_config;
use crate::error::ExitCode;

/// Dispatch CLI commands to their respective handlers.
///
/// Returns the exit code the process should terminate with. Errors bubble up
/// so `main()` can classify them.
pub(crate) async fn run_command(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Path {
            ref site,
            ref region,
            ref parent_region,
            ref root,
        } => commands::path::run(site, region.as_deref(), parent_region.as_deref(), root),
        Commands::Handle { ref input } => {
            let config = load_config(&cli)?;
            commands::handle::run(&config, input.as_deref(), cli.commit).await
        }
        Commands::Sync { device_id, ref name } => {
            let config = load_config(&cli)?;
            commands::sync::run(&config, device_id, name.as_deref(), cli.commit).await
        }
        Commands::Delete { ref name } => {
            let config = load_config(&cli)?;
            commands::delete::run(&config, name, cli.commit).await
        }
    }
}
