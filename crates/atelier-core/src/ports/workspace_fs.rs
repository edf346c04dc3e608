//! Workspace filesystem port (driven/secondary port)
//!
//! This module defines the interface for interacting with the local
//! project directory: resolving logical paths to native ones, writing
//! fetched content, and scanning the tree into a snapshot.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because filesystem errors are adapter-specific;
//!   the file-apply pipeline wraps them into the domain taxonomy.
//! - `resolve` must reject any path that would land outside `project_dir`
//!   (symlink escapes, drive-relative tricks); [`ProjectPath`] validation
//!   already forbids `..` components, so this is a second line of defense
//!   at the native-path level.
//! - Writes to distinct paths may run concurrently; writes to the same
//!   path must be serialized by the caller.

use std::path::{Path, PathBuf};

use crate::domain::newtypes::ProjectPath;
use crate::domain::node::LocalNode;

/// Port trait for local project-directory operations
#[async_trait::async_trait]
pub trait WorkspaceFs: Send + Sync {
    /// Resolves a logical, project-relative path to a concrete native path
    /// anchored at `project_dir`
    ///
    /// # Errors
    /// Returns an error if the resolved path would escape `project_dir` or
    /// cannot be represented on the local filesystem.
    fn resolve(&self, project_dir: &Path, path: &ProjectPath) -> anyhow::Result<PathBuf>;

    /// Writes `data` to `target`, creating any missing ancestor directories
    ///
    /// The write replaces existing content atomically (temp file plus
    /// rename), so a crash never leaves a partially written project file.
    async fn write_file_creating_ancestors(
        &self,
        target: &Path,
        data: &[u8],
    ) -> anyhow::Result<()>;

    /// Scans `project_dir` recursively into a local snapshot
    ///
    /// Every regular file is hashed; directories are recorded without
    /// content. The snapshot order is unspecified.
    async fn scan(&self, project_dir: &Path) -> anyhow::Result<Vec<LocalNode>>;
}
