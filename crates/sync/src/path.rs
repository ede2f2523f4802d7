//! Target folder derivation.

use cmk_sync_client::FolderPath;

/// Derive the folder a device belongs in.
///
/// - region and parent region: `root/parent_region/region/site`
/// - region only: `root/region/site`
/// - otherwise: `root/site`
///
/// Blank slugs count as absent. A parent region without a region is ignored.
pub fn build_path(
    site: &str,
    region: Option<&str>,
    parent_region: Option<&str>,
    root: &FolderPath,
) -> FolderPath {
    fn present(slug: Option<&str>) -> Option<&str> {
        slug.map(str::trim).filter(|s| !s.is_empty())
    }

    match (present(region), present(parent_region)) {
        (Some(region), Some(parent)) => root.join(parent).join(region).join(site),
        (Some(region), None) => root.join(region).join(site),
        (None, _) => root.join(site),
    }
}
