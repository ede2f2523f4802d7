//! Webhook request handling.
//!
//! Responsibilities:
//! - Read a request document from a file or stdin.
//! - Dispatch it and print the outcome.
//!
//! Invariants:
//! - The `--commit` flag can only enable commit, never disable it.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use cmk_sync::ScriptRequest;
use cmk_sync_config::Config;
use serde_json::Value;

use crate::commands::{build_dispatcher, print_outcome};
use crate::error::ExitCode;

pub async fn run(config: &Config, input: Option<&Path>, commit: bool) -> Result<ExitCode> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            buf
        }
    };

    let value: Value = serde_json::from_str(&raw).context("Request is not valid JSON")?;
    let mut request = ScriptRequest::from_value(value).context("Request has an invalid shape")?;
    request.commit |= commit;

    let dispatcher = build_dispatcher(config)?;
    let outcome = dispatcher.handle(&request).await?;
    print_outcome(&outcome)
}
