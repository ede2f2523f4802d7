//! Folder tree preparation.
//!
//! # Invariants
//! - Folders are checked and created top-down, so a folder's parent always
//!   exists (or has just been requested) before the folder itself
//! - A failed lookup means "absent"; a failed create is logged and does not
//!   stop the walk
//! - Folders that already exist are never touched

use tracing::{debug, error, info};

use cmk_sync_client::{CheckmkClient, FolderPath};

use crate::error::{Result, SyncError};
use crate::report::{Action, ActionKind, ActionResult};

/// Ensures every folder on a path exists in Checkmk.
pub struct FolderEnsurer<'a> {
    client: &'a CheckmkClient,
    commit: bool,
}

impl<'a> FolderEnsurer<'a> {
    pub fn new(client: &'a CheckmkClient, commit: bool) -> Self {
        Self { client, commit }
    }

    /// Walk `path` from the top and create each missing folder.
    ///
    /// Returns one [`Action`] per folder that was missing. An empty list
    /// means the whole path already existed.
    pub async fn ensure(&self, path: &FolderPath) -> Result<Vec<Action>> {
        let mut actions = Vec::new();

        for folder in path.ancestors() {
            match self.client.get_folder(&folder).await {
                Ok(existing) => {
                    debug!(folder = %folder, id = %existing.id, title = %existing.title, "Folder exists");
                    continue;
                }
                Err(e) if e.is_api_error() => {
                    debug!(folder = %folder, status = e.status(), "Folder not found");
                }
                Err(e) => return Err(SyncError::Monitoring(e)),
            }

            // ancestors() never yields the main folder, so both are present.
            let (Some(parent), Some(name)) = (folder.parent(), folder.name()) else {
                continue;
            };

            let result = if self.commit {
                self.create(&parent, name, &folder).await?
            } else {
                info!(folder = %folder, "Dry run: would create folder");
                ActionResult::DryRun
            };

            actions.push(Action {
                kind: ActionKind::CreateFolder,
                target: folder.to_string(),
                result,
            });
        }

        Ok(actions)
    }

    async fn create(&self, parent: &FolderPath, name: &str, folder: &FolderPath) -> Result<ActionResult> {
        let result = ActionResult::from_call(self.client.create_folder(parent, name).await)?;
        match &result {
            ActionResult::Success { code } => {
                info!(folder = %folder, code = code, outcome = "success", "Folder created");
            }
            ActionResult::Failed { code, message } => {
                error!(
                    folder = %folder,
                    code = code,
                    outcome = "failure",
                    error = %message,
                    "Folder creation failed"
                );
            }
            ActionResult::DryRun => {}
        }
        Ok(result)
    }
}

