//! Change records
//!
//! A change classifies how one path differs between two snapshots of the
//! same side (previous vs. latest). The remote flavor carries the new
//! version number for additions and updates; the local flavor carries no
//! payload because hash differences are detected but not retained.
//!
//! The classifier never emits `NoChange`; that variant exists only as the
//! conflict detector's synthetic default when no counterpart change exists
//! on the other side.

use serde::{Deserialize, Serialize};

use super::newtypes::ProjectPath;
use super::node::{NodeKind, PathKeyed};

/// How a path changed on the remote side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "change")]
pub enum RemoteChangeKind {
    /// Synthetic default, never emitted by the classifier
    NoChange,
    /// The path appeared, at this version
    Added { version: u64 },
    /// The path disappeared
    Removed,
    /// The path exists on both snapshots with a different version
    Updated { version: u64 },
}

/// How a path changed on the local side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalChangeKind {
    /// Synthetic default, never emitted by the classifier
    NoChange,
    Added,
    Removed,
    Updated,
}

/// A classified remote change for one path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteChange {
    /// The path the change refers to
    pub path: ProjectPath,
    /// File or directory (always `File` out of the classifier; directories
    /// are excluded from change detection)
    pub kind: NodeKind,
    /// The classified difference
    pub change: RemoteChangeKind,
}

impl RemoteChange {
    /// Returns true if the change calls for fetching content (added or
    /// updated on the remote side)
    pub fn needs_apply(&self) -> bool {
        matches!(
            self.change,
            RemoteChangeKind::Added { .. } | RemoteChangeKind::Updated { .. }
        )
    }
}

impl PathKeyed for RemoteChange {
    fn path(&self) -> &ProjectPath {
        &self.path
    }
}

/// A classified local change for one path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalChange {
    /// The path the change refers to
    pub path: ProjectPath,
    /// File or directory (always `File` out of the classifier)
    pub kind: NodeKind,
    /// The classified difference
    pub change: LocalChangeKind,
}

impl PathKeyed for LocalChange {
    fn path(&self) -> &ProjectPath {
        &self.path
    }
}
