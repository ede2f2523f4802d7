//! Folder path preview.

use anyhow::Result;
use cmk_sync::build_path;
use cmk_sync_client::FolderPath;

use crate::error::ExitCode;

pub fn run(
    site: &str,
    region: Option<&str>,
    parent_region: Option<&str>,
    root: &str,
) -> Result<ExitCode> {
    let root = FolderPath::parse(root);
    println!("{}", build_path(site, region, parent_region, &root));
    Ok(ExitCode::Success)
}
