//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration (see `config_context` module). Environment
//!   variables are read by the config loader, not by clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cmk-sync")]
#[command(about = "Synchronize NetBox devices into the Checkmk host tree", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  cmk-sync handle --input webhook.json\n  cmk-sync --commit sync --device-id 42\n  cmk-sync --commit delete --name sw-ber-01\n  cmk-sync path --site berlin --region de --parent-region europe\n"
)]
pub struct Cli {
    /// Path to a JSON configuration file.
    ///
    /// Can also be set via CMK_SYNC_CONFIG_PATH environment variable.
    #[arg(long, global = true, value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Checkmk host (and optional port), e.g. monitoring.example.com
    #[arg(long, global = true)]
    pub checkmk_host: Option<String>,

    /// Checkmk site name
    #[arg(long, global = true)]
    pub checkmk_site: Option<String>,

    /// NetBox base URL, e.g. https://netbox.example.com
    #[arg(long, global = true)]
    pub netbox_url: Option<String>,

    /// Root folder of the synchronized tree, e.g. /network
    #[arg(long, global = true, value_name = "FOLDER")]
    pub root_folder: Option<String>,

    /// Request timeout in seconds for both systems
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification for both systems (for self-signed certificates)
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Apply changes. Without it, mutations are only logged.
    #[arg(long, global = true)]
    pub commit: bool,

    /// Log output format (logs always go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Handle a webhook request read from a file or stdin
    Handle {
        /// File holding the request; reads stdin when omitted
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Sync one device from NetBox into Checkmk
    Sync {
        /// NetBox device id
        #[arg(long)]
        device_id: u64,

        /// Checkmk host name (defaults to the NetBox device name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Delete a host from Checkmk
    Delete {
        /// Checkmk host name
        #[arg(long)]
        name: String,
    },

    /// Print the folder a device placement maps to
    Path {
        /// Site slug
        #[arg(long)]
        site: String,

        /// Region slug
        #[arg(long)]
        region: Option<String>,

        /// Parent region slug (ignored without --region)
        #[arg(long)]
        parent_region: Option<String>,

        /// Root folder of the synchronized tree
        #[arg(long, default_value = cmk_sync_config::constants::DEFAULT_ROOT_FOLDER)]
        root: String,
    },
}
