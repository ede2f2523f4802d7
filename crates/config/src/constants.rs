//! Centralized constants for the cmk-sync workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Checkmk Defaults
// =============================================================================

/// Default Checkmk site name.
pub const DEFAULT_CHECKMK_SITE: &str = "cmk";

/// Default automation user name.
pub const DEFAULT_AUTOMATION_USER: &str = "automation";

/// Default folder under which synchronized hosts are placed.
pub const DEFAULT_ROOT_FOLDER: &str = "/network";

/// Path of the REST API below the site, without leading slash.
pub const CHECKMK_API_PATH: &str = "check_mk/api/1.0";
