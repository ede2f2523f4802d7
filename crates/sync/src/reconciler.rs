//! Host state reconciliation.
//!
//! # Update flow
//! 1. Ensure the target folder path exists.
//! 2. Look the host up. A non-success status means it does not exist.
//! 3. Existing host: move it if its folder differs, then update its IP
//!    address if that differs. Both steps are attempted independently.
//! 4. Missing host: create it in the target folder.
//!
//! # Invariants
//! - Every Checkmk call is attempted exactly once
//! - Non-success statuses are logged and reported, never returned as errors
//! - After a successful move the host is re-read so the IP update uses a
//!   fresh ETag
//! - Nothing is mutated unless `commit` is set

use std::net::Ipv4Addr;

use tracing::{debug, error, info, warn};

use cmk_sync_client::{CheckmkClient, CreateHostParams, FolderPath, HostConfig};
use cmk_sync_config::LabelTag;

use crate::error::{Result, SyncError};
use crate::folders::FolderEnsurer;
use crate::report::{Action, ActionKind, ActionResult, DeleteOutcome, DeleteState, UpdateReport};

/// `If-Match` value used when Checkmk did not send an ETag.
const ANY_ETAG: &str = "*";

/// Brings one Checkmk host entry in line with its device record.
pub struct HostReconciler<'a> {
    client: &'a CheckmkClient,
    commit: bool,
    label: Option<&'a LabelTag>,
}

impl<'a> HostReconciler<'a> {
    pub fn new(client: &'a CheckmkClient, commit: bool) -> Self {
        Self {
            client,
            commit,
            label: None,
        }
    }

    /// Label attached to hosts this reconciler creates.
    pub fn with_label(mut self, label: Option<&'a LabelTag>) -> Self {
        self.label = label;
        self
    }

    /// Create, move or re-address `host_name` so it lives in `target` with `ip`.
    pub async fn reconcile_update(
        &self,
        host_name: &str,
        target: &FolderPath,
        ip: Ipv4Addr,
    ) -> Result<UpdateReport> {
        let ipaddress = ip.to_string();
        let mut actions = FolderEnsurer::new(self.client, self.commit)
            .ensure(target)
            .await?;

        match self.lookup(host_name).await? {
            Some(host) => {
                info!(host = host_name, "Host exists in Checkmk");
                actions.extend(self.converge(host, target, &ipaddress).await?);
            }
            None => {
                info!(host = host_name, folder = %target, "Host not found in Checkmk, creating it");
                actions.push(self.create(host_name, target, &ipaddress).await?);
            }
        }

        if actions.is_empty() {
            info!(host = host_name, "Host is up to date");
        }

        Ok(UpdateReport {
            host_name: host_name.to_string(),
            folder: target.clone(),
            ipaddress,
            committed: self.commit,
            actions,
        })
    }

    /// Delete `host_name`. Only 204 counts as success.
    pub async fn reconcile_delete(&self, host_name: &str) -> Result<DeleteOutcome> {
        if !self.commit {
            info!(host = host_name, "Dry run: would delete host");
            return Ok(DeleteOutcome {
                state: DeleteState::Skipped,
                code: None,
            });
        }

        let outcome = match self.client.delete_host(host_name).await {
            Ok(204) => {
                info!(host = host_name, code = 204, outcome = "success", "Host deleted");
                DeleteOutcome {
                    state: DeleteState::Successful,
                    code: Some(204),
                }
            }
            Ok(code) => {
                error!(host = host_name, code = code, outcome = "failure", "Host deletion returned unexpected status");
                DeleteOutcome {
                    state: DeleteState::Failed,
                    code: Some(code),
                }
            }
            Err(e) if e.is_api_error() => {
                error!(host = host_name, code = e.status(), outcome = "failure", error = %e, "Host deletion failed");
                DeleteOutcome {
                    state: DeleteState::Failed,
                    code: e.status(),
                }
            }
            Err(e) => return Err(SyncError::Monitoring(e)),
        };

        Ok(outcome)
    }

    async fn lookup(&self, host_name: &str) -> Result<Option<HostConfig>> {
        match self.client.get_host(host_name).await {
            Ok(host) => Ok(Some(host)),
            Err(e) if e.is_api_error() => {
                debug!(host = host_name, status = e.status(), "Host lookup returned no host");
                Ok(None)
            }
            Err(e) => Err(SyncError::Monitoring(e)),
        }
    }

    async fn converge(&self, host: HostConfig, target: &FolderPath, ipaddress: &str) -> Result<Vec<Action>> {
        let host_name = host.host_name.as_str();
        let mut etag = host.etag.clone();
        let mut actions = Vec::new();
        let ip_differs = host.ipaddress.as_deref() != Some(ipaddress);

        if &host.folder != target {
            warn!(host = host_name, current = %host.folder, target = %target, "Host in wrong folder");

            let result = if self.commit {
                let result = ActionResult::from_call(
                    self.client
                        .move_host(host_name, target, etag.as_deref().unwrap_or(ANY_ETAG))
                        .await,
                )?;
                match &result {
                    ActionResult::Success { code } => {
                        info!(host = host_name, from = %host.folder, to = %target, code = code, outcome = "success", "Host moved");
                        if ip_differs {
                            etag = self.refresh_etag(host_name, etag).await?;
                        }
                    }
                    ActionResult::Failed { code, message } => {
                        error!(host = host_name, from = %host.folder, to = %target, code = code, outcome = "failure", error = %message, "Host move failed");
                    }
                    ActionResult::DryRun => {}
                }
                result
            } else {
                info!(host = host_name, from = %host.folder, to = %target, "Dry run: would move host");
                ActionResult::DryRun
            };

            actions.push(Action {
                kind: ActionKind::MoveHost,
                target: target.to_string(),
                result,
            });
        }

        if ip_differs {
            warn!(
                host = host_name,
                current = host.ipaddress.as_deref().unwrap_or(""),
                target = ipaddress,
                "IP address not equal"
            );

            let result = if self.commit {
                let result = ActionResult::from_call(
                    self.client
                        .update_host_ip(host_name, ipaddress, etag.as_deref().unwrap_or(ANY_ETAG))
                        .await,
                )?;
                match &result {
                    ActionResult::Success { code } => {
                        info!(host = host_name, ipaddress = ipaddress, code = code, outcome = "success", "IP address updated");
                    }
                    ActionResult::Failed { code, message } => {
                        error!(host = host_name, ipaddress = ipaddress, code = code, outcome = "failure", error = %message, "IP address update failed");
                    }
                    ActionResult::DryRun => {}
                }
                result
            } else {
                info!(host = host_name, ipaddress = ipaddress, "Dry run: would update IP address");
                ActionResult::DryRun
            };

            actions.push(Action {
                kind: ActionKind::UpdateIp,
                target: ipaddress.to_string(),
                result,
            });
        }

        Ok(actions)
    }

    /// Re-read the host after a mutation. Falls back to the old ETag if the read fails.
    async fn refresh_etag(&self, host_name: &str, previous: Option<String>) -> Result<Option<String>> {
        match self.client.get_host(host_name).await {
            Ok(host) if host.etag.is_some() => Ok(host.etag),
            Ok(_) => {
                warn!(host = host_name, "Host re-read returned no ETag, keeping the previous one");
                Ok(previous)
            }
            Err(e) if e.is_api_error() => {
                warn!(host = host_name, status = e.status(), "Host re-read failed, keeping the previous ETag");
                Ok(previous)
            }
            Err(e) => Err(SyncError::Monitoring(e)),
        }
    }

    async fn create(&self, host_name: &str, target: &FolderPath, ipaddress: &str) -> Result<Action> {
        let mut params = CreateHostParams::new(host_name, target.clone(), ipaddress);
        if let Some(label) = self.label {
            params = params.with_label(&label.key, &label.value);
        }

        let result = if self.commit {
            let result = ActionResult::from_call(self.client.create_host(&params).await)?;
            match &result {
                ActionResult::Success { code } => {
                    info!(host = host_name, folder = %target, ipaddress = ipaddress, code = code, outcome = "success", "Host created");
                }
                ActionResult::Failed { code, message } => {
                    error!(host = host_name, folder = %target, code = code, outcome = "failure", error = %message, "Host creation failed");
                }
                ActionResult::DryRun => {}
            }
            result
        } else {
            info!(host = host_name, folder = %target, ipaddress = ipaddress, "Dry run: would create host");
            ActionResult::DryRun
        };

        Ok(Action {
            kind: ActionKind::CreateHost,
            target: target.to_string(),
            result,
        })
    }
}
