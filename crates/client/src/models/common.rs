//! Error payloads shared by both APIs.

use serde::Deserialize;

/// Problem document returned with non-success responses.
///
/// Checkmk sends RFC 7807 style `{title, status, detail}`; NetBox sends
/// `{detail}`. Both shapes deserialize into this type.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ProblemDetails {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ProblemDetails {
    /// One-line summary, `None` when the document carries no text at all.
    pub fn summary(&self) -> Option<String> {
        match (self.title.as_deref(), self.detail.as_deref()) {
            (Some(title), Some(detail)) => Some(format!("{title}: {detail}")),
            (Some(text), None) | (None, Some(text)) => Some(text.to_string()),
            (None, None) => None,
        }
    }
}
