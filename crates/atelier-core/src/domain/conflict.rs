//! Conflict entity
//!
//! A conflict is a path that changed on both the local and remote side
//! within the same previous/latest window. Conflicts are surfaced, never
//! resolved automatically; content merging is out of scope for the sync
//! core.

use serde::{Deserialize, Serialize};

use super::change::{LocalChangeKind, RemoteChangeKind};
use super::newtypes::ProjectPath;

/// A path that changed on both sides between the same pair of snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// The contested path
    pub path: ProjectPath,
    /// What happened locally
    pub local: LocalChangeKind,
    /// What happened remotely; `NoChange` only as a defensive default when
    /// the remote lookup finds no counterpart (unreachable after an
    /// intersection by path)
    pub remote: RemoteChangeKind,
}

impl Conflict {
    /// Creates a new conflict for a path
    pub fn new(path: ProjectPath, local: LocalChangeKind, remote: RemoteChangeKind) -> Self {
        Self {
            path,
            local,
            remote,
        }
    }
}
