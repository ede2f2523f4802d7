//! URL encoding utilities for constructing safe API paths.
//!
//! Provides percent-encoding for URL path segments to handle special characters
//! in resource names (host names, folder names, etc.) that could otherwise cause
//! path traversal or incorrect URL resolution.
//!
//! # Security Considerations
//!
//! Without percent-encoding, special characters in resource names could:
//! - Cause path traversal (e.g., `host/name` would create a nested path)
//! - Break URL parsing (e.g., `host?name` would create a query parameter)
//! - Cause double-decode issues (e.g., `host%20name` might be decoded prematurely)
//!
//! # Example
//!
//! ```
//! use cmk_sync_client::endpoints::url_encoding::encode_path_segment;
//!
//! let encoded = encode_path_segment("host/name");
//! assert_eq!(encoded, "host%2Fname");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// Based on RFC 3986 section 3.3, plus additional characters that have
/// special meaning in Checkmk REST API paths or could cause issues:
/// - Space, quotes, angle brackets: problematic in URLs
/// - Backslash, pipe, caret, backtick: often blocked or problematic
/// - Tilde: Checkmk's folder separator in object identifiers
/// - Plus, comma, semicolon: can have special meaning in some contexts
/// - Curly braces, square brackets: reserved in URI templates
/// - Percent: must be encoded to prevent double-encoding issues
/// - Slash: must be encoded to prevent path traversal
/// - Question mark and hash: have special URL meaning
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')      // Space
    .add(b'"')      // Double quote
    .add(b'<')      // Less than
    .add(b'>')      // Greater than
    .add(b'`')      // Backtick
    .add(b'{')      // Left curly brace
    .add(b'}')      // Right curly brace
    .add(b'|')      // Pipe
    .add(b'\\')     // Backslash
    .add(b'^')      // Caret
    .add(b'~')      // Tilde
    .add(b'%')      // Percent (prevents double-encoding)
    .add(b'/')      // Forward slash (prevents path traversal)
    .add(b'?')      // Question mark
    .add(b'#')      // Hash
    .add(b'+')      // Plus
    .add(b',')      // Comma
    .add(b';')      // Semicolon
    .add(b'[')      // Left square bracket
    .add(b']'); // Right square bracket

/// Percent-encode a string for safe use as a URL path segment.
///
/// Used for every value interpolated into a URL path: host names, folder
/// segments and NetBox object ids.
///
/// # Examples
///
/// ```
/// use cmk_sync_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("simple"), "simple");
/// assert_eq!(encode_path_segment("host name"), "host%20name");
/// assert_eq!(encode_path_segment("host/name"), "host%2Fname");
/// assert_eq!(encode_path_segment("host%test"), "host%25test");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
