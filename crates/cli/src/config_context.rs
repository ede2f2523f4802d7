//! Configuration assembly for commands that talk to remote systems.
//!
//! Responsibilities:
//! - Layer config file, environment and CLI flags through [`ConfigLoader`].
//!
//! Does NOT handle:
//! - `.env` loading (done in `main()` before parsing).
//!
//! Invariants:
//! - Precedence is CLI flag > environment > config file > default.
//! - Blank `--config-path` values are ignored so the env var can apply.

use std::time::Duration;

use anyhow::{Context, Result};
use cmk_sync_config::{Config, ConfigLoader};

use crate::args::Cli;

pub(crate) fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();

    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    // from_env() may pick up CMK_SYNC_CONFIG_PATH, so the file is read after it.
    let loader = loader
        .from_env()
        .context("Failed to load configuration from environment")?;
    let mut loader = loader
        .from_file()
        .context("Failed to load configuration file")?
        .from_env()
        .context("Failed to load configuration from environment")?;

    if let Some(ref host) = cli.checkmk_host {
        loader = loader.with_checkmk_host(host.clone());
    }
    if let Some(ref site) = cli.checkmk_site {
        loader = loader.with_checkmk_site(site.clone());
    }
    if let Some(ref url) = cli.netbox_url {
        loader = loader.with_netbox_url(url.clone());
    }
    if let Some(ref root) = cli.root_folder {
        loader = loader.with_root_folder(root.clone());
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    loader.build().context("Failed to build configuration")
}
