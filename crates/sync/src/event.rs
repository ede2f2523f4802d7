//! Inbound webhook requests.
//!
//! NetBox delivers device changes through a webhook whose body template is
//! `{"data": {"event": ..., "name": ..., "data": {...}}, "commit": true}`.
//! The inner object is the payload; `commit` authorizes mutations.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// A request handed over by the hosting runner.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScriptRequest {
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub commit: bool,
}

impl ScriptRequest {
    pub fn new(data: Value, commit: bool) -> Self {
        Self { data, commit }
    }

    /// Accept either a full request or a bare payload.
    ///
    /// A document with a top-level `event` key is treated as a bare payload
    /// and is not committed.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        if value.get("event").is_some() {
            return Ok(Self::new(value, false));
        }
        serde_json::from_value(value)
    }
}

/// A decoded webhook event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookEvent {
    Updated { name: String, device_id: u64 },
    Deleted { name: String },
    Unknown(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Webhook payload has no device name")]
    MissingName,
    #[error("Webhook payload has no device id")]
    MissingDeviceId,
    #[error("Webhook event must be a string")]
    InvalidEvent,
}

impl WebhookEvent {
    /// Decode a payload. `Ok(None)` means there is no `event` key at all,
    /// i.e. the request did not come from a webhook.
    pub fn decode(payload: &Value) -> Result<Option<Self>, PayloadError> {
        let Some(event) = payload.get("event") else {
            return Ok(None);
        };
        let event = event.as_str().ok_or(PayloadError::InvalidEvent)?;

        let decoded = match event {
            "updated" => WebhookEvent::Updated {
                name: device_name(payload)?,
                device_id: device_id(payload)?,
            },
            "deleted" => WebhookEvent::Deleted {
                name: device_name(payload)?,
            },
            other => WebhookEvent::Unknown(other.to_string()),
        };
        Ok(Some(decoded))
    }
}

/// `name` at the top of the payload, falling back to the nested device object.
fn device_name(payload: &Value) -> Result<String, PayloadError> {
    [payload.get("name"), payload.pointer("/data/name")]
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or(PayloadError::MissingName)
}

fn device_id(payload: &Value) -> Result<u64, PayloadError> {
    payload
        .pointer("/data/id")
        .and_then(Value::as_u64)
        .ok_or(PayloadError::MissingDeviceId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_updated() {
        let payload = json!({"event": "updated", "name": "sw-ber-01", "data": {"id": 42}});
        assert_eq!(
            WebhookEvent::decode(&payload).unwrap(),
            Some(WebhookEvent::Updated {
                name: "sw-ber-01".to_string(),
                device_id: 42
            })
        );
    }

    #[test]
    fn test_decode_deleted() {
        let payload = json!({"event": "deleted", "name": "srv1", "data": {"id": 7}});
        assert_eq!(
            WebhookEvent::decode(&payload).unwrap(),
            Some(WebhookEvent::Deleted {
                name: "srv1".to_string()
            })
        );
    }

    #[test]
    fn test_decode_name_from_nested_device() {
        let payload = json!({"event": "deleted", "data": {"id": 7, "name": "srv1"}});
        assert_eq!(
            WebhookEvent::decode(&payload).unwrap(),
            Some(WebhookEvent::Deleted {
                name: "srv1".to_string()
            })
        );
    }

    #[test]
    fn test_decode_without_event() {
        assert_eq!(WebhookEvent::decode(&json!({"name": "srv1"})).unwrap(), None);
        assert_eq!(WebhookEvent::decode(&Value::Null).unwrap(), None);
    }

    #[test]
    fn test_decode_unknown_event() {
        let payload = json!({"event": "created", "name": "srv1"});
        assert_eq!(
            WebhookEvent::decode(&payload).unwrap(),
            Some(WebhookEvent::Unknown("created".to_string()))
        );
    }

    #[test]
    fn test_decode_missing_fields() {
        assert_eq!(
            WebhookEvent::decode(&json!({"event": "updated", "name": "srv1", "data": {}})),
            Err(PayloadError::MissingDeviceId)
        );
        assert_eq!(
            WebhookEvent::decode(&json!({"event": "deleted", "name": ""})),
            Err(PayloadError::MissingName)
        );
        assert_eq!(
            WebhookEvent::decode(&json!({"event": 3})),
            Err(PayloadError::InvalidEvent)
        );
    }

    #[test]
    fn test_request_from_template() {
        let request = ScriptRequest::from_value(json!({
            "data": {"event": "deleted", "name": "srv1", "data": {"id": 7}},
            "commit": true
        }))
        .unwrap();
        assert!(request.commit);
        assert_eq!(request.data["name"], "srv1");
    }

    #[test]
    fn test_request_from_bare_payload() {
        let request =
            ScriptRequest::from_value(json!({"event": "deleted", "name": "srv1"})).unwrap();
        assert!(!request.commit);
        assert_eq!(request.data["event"], "deleted");
    }

    #[test]
    fn test_request_without_data() {
        let request = ScriptRequest::from_value(json!({"commit": true})).unwrap();
        assert_eq!(request.data, Value::Null);
    }
}
