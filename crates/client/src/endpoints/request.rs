//! Single-attempt request helper shared by every endpoint.
//!
//! Requests are never retried: a rejected mutation (for example a stale
//! `If-Match` token) is reported to the caller, which decides what to do.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::ProblemDetails;

/// Send a request and turn non-success statuses into [`ClientError::ApiError`].
///
/// `endpoint` and `method` are only used for logging; the logged endpoint is
/// the path template, not the concrete URL, so host names stay out of
/// debug output.
pub async fn send_request(builder: RequestBuilder, endpoint: &str, method: &str) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();

    debug!(
        endpoint = endpoint,
        method = method,
        status = status.as_u16(),
        "API request completed"
    );

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = serde_json::from_str::<ProblemDetails>(&body)
        .ok()
        .and_then(|p| p.summary())
        .unwrap_or(body);

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    })
}
