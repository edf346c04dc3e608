//! Workspace filesystem adapter (secondary/driven adapter)
//!
//! Implements [`WorkspaceFs`] using `tokio::fs` for async file operations.
//!
//! ## Design Decisions
//!
//! - **Atomic writes**: Uses write-to-temp + rename to avoid partial writes
//!   on crash or power loss. Staging files get a unique hidden name so they
//!   can never collide with a project file, and `scan` ignores any left
//!   behind by a crash.
//! - **Escape check**: `resolve` re-verifies that the joined native path
//!   stays under the project directory even though [`ProjectPath`] already
//!   forbids `..` components.
//! - **SHA-256 scanning**: Every regular file is read and hashed during a
//!   scan so local snapshots can be compared by content.

use std::path::{Path, PathBuf};

use anyhow::bail;
use atelier_core::domain::newtypes::{ContentHash, ProjectPath};
use atelier_core::domain::node::LocalNode;
use atelier_core::ports::workspace_fs::WorkspaceFs;
use tracing::{debug, instrument, warn};

/// Name prefix reserved for the staging files used by atomic writes.
///
/// `scan` skips entries carrying this prefix, so a staging file left behind
/// by a crash never shows up as a local change.
const STAGING_PREFIX: &str = ".atelier-tmp";

/// Adapter that bridges the [`WorkspaceFs`] port to the real filesystem.
///
/// This is a zero-sized struct because all operations derive their context
/// from the `project_dir` arguments. Configuration (e.g. workspace root)
/// lives at a higher layer.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceAdapter;

impl WorkspaceAdapter {
    /// Create a new `WorkspaceAdapter`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl WorkspaceFs for WorkspaceAdapter {
    fn resolve(&self, project_dir: &Path, path: &ProjectPath) -> anyhow::Result<PathBuf> {
        let mut resolved = project_dir.to_path_buf();
        for component in path.components() {
            resolved.push(component);
        }

        if !resolved.starts_with(project_dir) {
            bail!(
                "Resolved path {} escapes project directory {}",
                resolved.display(),
                project_dir.display()
            );
        }

        Ok(resolved)
    }

    #[instrument(skip(self, data), fields(target = %target.display(), bytes = data.len()))]
    async fn write_file_creating_ancestors(
        &self,
        target: &Path,
        data: &[u8],
    ) -> anyhow::Result<()> {
        let parent = target.parent().unwrap_or_else(|| Path::new("."));
        tokio::fs::create_dir_all(parent).await?;

        // Stage in the same directory so the rename is atomic (same
        // filesystem). The staging name is unique, so it cannot clobber a
        // project file that happens to end in `.tmp`.
        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempfile_in(parent)?;

        debug!(staging = %staging.path().display(), "writing to staging file");
        tokio::fs::write(staging.path(), data).await?;

        debug!("renaming staging file to target");
        staging.persist(target).map_err(|e| e.error)?;

        debug!("write complete");
        Ok(())
    }

    #[instrument(skip(self), fields(project_dir = %project_dir.display()))]
    async fn scan(&self, project_dir: &Path) -> anyhow::Result<Vec<LocalNode>> {
        let mut nodes = Vec::new();
        let mut pending: Vec<PathBuf> = vec![project_dir.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let mut entries = tokio::fs::read_dir(&dir).await?;
            while let Some(entry) = entries.next_entry().await? {
                let native = entry.path();
                if entry.file_name().to_string_lossy().starts_with(STAGING_PREFIX) {
                    debug!(path = %native.display(), "Skipping staging leftover");
                    continue;
                }

                let Some(logical) = logical_path(project_dir, &native) else {
                    warn!(path = %native.display(), "Skipping entry with unrepresentable path");
                    continue;
                };

                let file_type = entry.file_type().await?;
                if file_type.is_dir() {
                    nodes.push(LocalNode::directory(logical));
                    pending.push(native);
                } else if file_type.is_file() {
                    let data = tokio::fs::read(&native).await?;
                    nodes.push(LocalNode::file(logical, ContentHash::of(&data)));
                } else {
                    // Symlinks and special files are not part of a project.
                    debug!(path = %native.display(), "Skipping non-regular entry");
                }
            }
        }

        debug!(count = nodes.len(), "scan complete");
        Ok(nodes)
    }
}

/// Converts a native path under `project_dir` back into a logical path.
///
/// Returns `None` for paths that are not valid UTF-8 or otherwise cannot
/// be expressed as a [`ProjectPath`].
fn logical_path(project_dir: &Path, native: &Path) -> Option<ProjectPath> {
    let relative = native.strip_prefix(project_dir).ok()?;
    let mut parts = Vec::new();
    for component in relative.components() {
        parts.push(component.as_os_str().to_str()?);
    }
    ProjectPath::new(parts.join("/")).ok()
}
