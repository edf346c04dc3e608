//! Atelier sync orchestration
//!
//! Drives the pull-based synchronization of one project: scanning the
//! local workspace, diffing both sides against the previous pass,
//! applying remote file changes, and publishing the resulting
//! [`SyncState`](atelier_core::domain::state::SyncState).
//!
//! ## Modules
//!
//! - [`filesystem`] - Workspace filesystem adapter (atomic writes, SHA-256 scanning)
//! - [`engine`] - Refresh-pass engine orchestrating diff, conflict check, and apply
//! - [`state`] - Observable sync-state cell backed by a watch channel
//! - [`scheduler`] - Periodic and on-demand refresh scheduling

pub mod engine;
pub mod filesystem;
pub mod scheduler;
pub mod state;

pub use engine::SyncEngine;
pub use filesystem::WorkspaceAdapter;
pub use scheduler::{RefreshHandle, RefreshScheduler};
pub use state::SyncStateCell;
