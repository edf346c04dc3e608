//! Sync exception taxonomy
//!
//! The single error currency for the whole sync pipeline. Lower-level
//! failures (HTTP errors, filesystem errors) are mapped into this closed
//! set at the pipeline boundary and never leak upward in their native
//! form. The UI layer renders each kind as a human-readable message and
//! offers a manual retry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::newtypes::ProjectPath;

/// Closed taxonomy of synchronization failures
///
/// Every failure reachable from the sync core is one of these six kinds.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SyncError {
    /// Local and remote changed the same path(s); nothing was applied
    #[error("Local and remote changes conflict")]
    ConflictingChanges,

    /// A write target could not be modified (permissions)
    #[error("Read-only file changed: {path} ({reason})")]
    ReadOnlyFilesChanged { path: ProjectPath, reason: String },

    /// A remote entry carries a name the local filesystem rejects
    #[error("Invalid filename: {name}")]
    InvalidFilename { name: String },

    /// A local filesystem operation failed for a project entry
    #[error("File system corrupted at {path}: {reason}")]
    FileSystemCorrupted { path: ProjectPath, reason: String },

    /// The configured project directory does not exist
    #[error("Project directory is missing")]
    ProjectDirMissing,

    /// The project store could not be reached or answered with an error
    #[error("Network error: {reason}")]
    Network { reason: String },
}
