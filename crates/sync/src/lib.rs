//! Reconciliation of NetBox device records into the Checkmk host tree.
//!
//! The pieces, bottom-up:
//! - [`path::build_path`] derives a device's target folder from its
//!   region / parent region / site placement.
//! - [`folders::FolderEnsurer`] makes sure every folder on that path exists.
//! - [`reconciler::HostReconciler`] creates, moves, re-addresses or deletes
//!   the host entry.
//! - [`dispatcher::EventDispatcher`] decodes a webhook request, resolves the
//!   device through a [`device::DeviceInventory`] and routes it to the
//!   reconciler.
//!
//! Every mutating call is gated on the request's `commit` flag. Without it
//! the would-be action is logged and reported as a dry run.

pub mod device;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod folders;
pub mod path;
pub mod reconciler;
pub mod report;

pub use device::{DeviceInventory, DeviceRecord};
pub use dispatcher::EventDispatcher;
pub use error::{Result, SyncError};
pub use event::{PayloadError, ScriptRequest, WebhookEvent};
pub use folders::FolderEnsurer;
pub use path::build_path;
pub use reconciler::HostReconciler;
pub use report::{Action, ActionKind, ActionResult, DeleteOutcome, DeleteState, Outcome, UpdateReport};
