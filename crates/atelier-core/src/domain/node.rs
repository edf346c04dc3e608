//! Node descriptors
//!
//! A node descriptor is the atomic unit being diffed: one filesystem entry
//! of a project tree, observed either on the remote store (version-numbered)
//! or on the local disk (content-hashed).
//!
//! Identity for all set operations is the logical [`ProjectPath`] alone;
//! kind and version/hash are payload. The [`PathKeyed`] trait makes that
//! identity rule explicit and shared by every consumer.

use serde::{Deserialize, Serialize};

use super::newtypes::{ContentHash, ProjectPath};

/// Whether a node is a file or a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    File,
    Directory,
}

impl NodeKind {
    /// Returns true for `NodeKind::File`
    pub fn is_file(&self) -> bool {
        matches!(self, NodeKind::File)
    }
}

/// Identity-by-path, the single comparator used by all diff set operations
///
/// Implemented by node descriptors and change records so that difference
/// and intersection utilities cannot accidentally compare on different key
/// shapes.
pub trait PathKeyed {
    /// The logical path that identifies this entry
    fn path(&self) -> &ProjectPath;
}

impl<T: PathKeyed> PathKeyed for &T {
    fn path(&self) -> &ProjectPath {
        (*self).path()
    }
}

/// A project entry as reported by the remote store
///
/// The store bumps `version` on every write; equal versions imply equal
/// content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteNode {
    /// Project-relative path of the entry
    pub path: ProjectPath,
    /// File or directory
    pub kind: NodeKind,
    /// Monotonic version number assigned by the store
    pub version: u64,
}

impl RemoteNode {
    /// Convenience constructor for a file entry
    pub fn file(path: ProjectPath, version: u64) -> Self {
        Self {
            path,
            kind: NodeKind::File,
            version,
        }
    }

    /// Convenience constructor for a directory entry
    pub fn directory(path: ProjectPath, version: u64) -> Self {
        Self {
            path,
            kind: NodeKind::Directory,
            version,
        }
    }
}

impl PathKeyed for RemoteNode {
    fn path(&self) -> &ProjectPath {
        &self.path
    }
}

/// A project entry as observed on the local disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalNode {
    /// Project-relative path of the entry
    pub path: ProjectPath,
    /// File or directory
    pub kind: NodeKind,
    /// SHA-256 hash of the file content (directories carry the empty-input
    /// digest; it is never compared because directories are excluded from
    /// diffing)
    pub hash: ContentHash,
}

impl LocalNode {
    /// Convenience constructor for a file entry
    pub fn file(path: ProjectPath, hash: ContentHash) -> Self {
        Self {
            path,
            kind: NodeKind::File,
            hash,
        }
    }

    /// Convenience constructor for a directory entry
    pub fn directory(path: ProjectPath) -> Self {
        Self {
            path,
            kind: NodeKind::Directory,
            hash: ContentHash::of(b""),
        }
    }
}

impl PathKeyed for LocalNode {
    fn path(&self) -> &ProjectPath {
        &self.path
    }
}
