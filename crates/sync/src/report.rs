//! Structured outcomes handed back to the hosting runner.

use serde::Serialize;

use cmk_sync_client::{ClientError, FolderPath};

use crate::error::{Result, SyncError};

/// Kind of mutation the sync issued (or would have issued).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    CreateFolder,
    CreateHost,
    MoveHost,
    UpdateIp,
}

/// Result of one mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActionResult {
    Success { code: u16 },
    Failed { code: u16, message: String },
    /// Not sent because the request was not committed.
    DryRun,
}

impl ActionResult {
    /// Classify the result of a mutating Checkmk call.
    ///
    /// A non-success status becomes [`ActionResult::Failed`]; transport
    /// faults abort the reconciliation.
    pub(crate) fn from_call(result: std::result::Result<u16, ClientError>) -> Result<Self> {
        match result {
            Ok(code) => Ok(ActionResult::Success { code }),
            Err(ClientError::ApiError {
                status, message, ..
            }) => Ok(ActionResult::Failed {
                code: status,
                message,
            }),
            Err(e) => Err(SyncError::Monitoring(e)),
        }
    }
}

/// One mutation and its result, e.g. `{"action": "move_host", "target": "/network/de", "status": "success", "code": 200}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    #[serde(rename = "action")]
    pub kind: ActionKind,
    /// The folder or address the action applies.
    pub target: String,
    #[serde(flatten)]
    pub result: ActionResult,
}

impl Action {
    pub fn is_failed(&self) -> bool {
        matches!(self.result, ActionResult::Failed { .. })
    }
}

/// Everything an update reconciliation did.
///
/// An empty `actions` list means the host was already in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateReport {
    pub host_name: String,
    pub folder: FolderPath,
    pub ipaddress: String,
    pub committed: bool,
    pub actions: Vec<Action>,
}

impl UpdateReport {
    pub fn has_failures(&self) -> bool {
        self.actions.iter().any(Action::is_failed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteState {
    Successful,
    Failed,
    /// Not sent because the request was not committed.
    Skipped,
}

/// `{"state": "successful", "code": 204}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteOutcome {
    pub state: DeleteState,
    pub code: Option<u16>,
}

/// What a webhook request resulted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Message {
        message: String,
        #[serde(skip)]
        failed: bool,
    },
    Delete(DeleteOutcome),
    Update(UpdateReport),
}

impl Outcome {
    pub fn info(message: impl Into<String>) -> Self {
        Outcome::Message {
            message: message.into(),
            failed: false,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Message {
            message: message.into(),
            failed: true,
        }
    }

    /// True when the runner should treat the request as failed.
    pub fn is_failure(&self) -> bool {
        match self {
            Outcome::Message { failed, .. } => *failed,
            Outcome::Delete(delete) => delete.state == DeleteState::Failed,
            Outcome::Update(report) => report.has_failures(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_serialization() {
        let outcome = Outcome::failure("Unknown action triggered");
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"message": "Unknown action triggered"})
        );
        assert!(outcome.is_failure());
        assert!(!Outcome::info("nothing to do").is_failure());
    }

    #[test]
    fn test_delete_serialization() {
        let outcome = Outcome::Delete(DeleteOutcome {
            state: DeleteState::Successful,
            code: Some(204),
        });
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"state": "successful", "code": 204})
        );
        assert!(!outcome.is_failure());
    }

    #[test]
    fn test_update_report_serialization() {
        let report = UpdateReport {
            host_name: "sw-ber-01".to_string(),
            folder: FolderPath::parse("/network/de/berlin"),
            ipaddress: "10.20.0.5".to_string(),
            committed: true,
            actions: vec![
                Action {
                    kind: ActionKind::MoveHost,
                    target: "/network/de/berlin".to_string(),
                    result: ActionResult::Success { code: 200 },
                },
                Action {
                    kind: ActionKind::UpdateIp,
                    target: "10.20.0.5".to_string(),
                    result: ActionResult::Failed {
                        code: 412,
                        message: "Precondition failed".to_string(),
                    },
                },
            ],
        };
        assert!(report.has_failures());

        let value = serde_json::to_value(Outcome::Update(report)).unwrap();
        assert_eq!(value["folder"], "/network/de/berlin");
        assert_eq!(
            value["actions"][0],
            json!({"action": "move_host", "target": "/network/de/berlin", "status": "success", "code": 200})
        );
        assert_eq!(value["actions"][1]["status"], "failed");
        assert_eq!(value["actions"][1]["code"], 412);
    }

    #[test]
    fn test_from_call_classification() {
        assert_eq!(
            ActionResult::from_call(Ok(204)).unwrap(),
            ActionResult::Success { code: 204 }
        );
        let failed = ActionResult::from_call(Err(ClientError::ApiError {
            status: 412,
            url: "http://cmk/x".to_string(),
            message: "stale".to_string(),
        }))
        .unwrap();
        assert_eq!(
            failed,
            ActionResult::Failed {
                code: 412,
                message: "stale".to_string()
            }
        );
        assert!(ActionResult::from_call(Err(ClientError::InvalidResponse("x".to_string()))).is_err());
    }

    #[test]
    fn test_dry_run_action_serialization() {
        let action = Action {
            kind: ActionKind::CreateFolder,
            target: "/network/de".to_string(),
            result: ActionResult::DryRun,
        };
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({"action": "create_folder", "target": "/network/de", "status": "dry_run"})
        );
    }
}
