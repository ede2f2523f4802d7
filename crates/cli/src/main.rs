//! cmk-sync - keep Checkmk hosts in line with NetBox devices.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Install logging (stderr only; stdout carries the outcome JSON).
//! - Load configuration and run the selected command.
//! - Translate the result into a structured exit code.
//!
//! Does NOT handle:
//! - Reconciliation logic (see `crates/sync`).
//! - REST API calls (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values are visible to the loader.
//! - Nothing but the outcome document is written to stdout.

mod args;
mod commands;
mod config_context;
mod dispatch;
mod error;

use args::{Cli, LogFormat};
use clap::Parser;
use cmk_sync_config::ConfigLoader;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ConfigError.as_i32());
    }

    let cli = Cli::parse();

    init_tracing(cli.log_format);

    let exit_code = match run_command(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Install the global subscriber. `RUST_LOG` overrides the default `info` level.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}
