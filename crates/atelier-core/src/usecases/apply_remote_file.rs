//! File-apply use case
//!
//! Turns one detected remote change into a local filesystem mutation:
//! fetch the file's bytes through the project store, resolve its logical
//! path inside the project directory, and write the content. Every failure
//! is translated into the closed [`SyncError`] taxonomy at this boundary;
//! no transport or filesystem error escapes in its native form.
//!
//! The operation is all-or-nothing from the caller's perspective: either
//! the file exists at the resolved path with the fetched content, or an
//! error is returned. No retry logic lives here, and concurrent writes to
//! the same path must be serialized by the orchestrator.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::newtypes::{ProjectId, ProjectPath};
use crate::domain::node::RemoteNode;
use crate::domain::sync_error::SyncError;
use crate::ports::project_store::{ProjectStore, SigningFailed, TransportError};
use crate::ports::workspace_fs::WorkspaceFs;

/// Characters rejected in file names, matching what the store itself
/// refuses when a project is created through the UI.
const FORBIDDEN_NAME_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*', '\\'];

/// Failure surfaced by the apply pipeline
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// A recoverable sync exception; the orchestrator records it and the
    /// user may retry
    #[error(transparent)]
    Exception(#[from] SyncError),

    /// The request could not be signed; the whole sync attempt must halt
    #[error(transparent)]
    Halted(#[from] SigningFailed),
}

/// Use case for applying a single remote file to the local project
/// directory
///
/// Holds the two collaborator ports; one instance serves any number of
/// files and projects.
pub struct ApplyRemoteFile {
    store: Arc<dyn ProjectStore>,
    fs: Arc<dyn WorkspaceFs>,
}

impl ApplyRemoteFile {
    /// Creates the use case with its collaborators
    pub fn new(store: Arc<dyn ProjectStore>, fs: Arc<dyn WorkspaceFs>) -> Self {
        Self { store, fs }
    }

    /// Fetches `file`'s content and writes it under `project_dir`
    ///
    /// Directory entries are ignored; the pipeline only ever writes files.
    ///
    /// # Errors
    ///
    /// - transport failures map per [`TransportError::into_sync_error`],
    ///   with `UnableToSign` escalated to [`ApplyError::Halted`];
    /// - a name the local filesystem rejects becomes
    ///   [`SyncError::InvalidFilename`];
    /// - path resolution failures become
    ///   [`SyncError::FileSystemCorrupted`];
    /// - write failures become [`SyncError::ReadOnlyFilesChanged`] when
    ///   caused by permissions, otherwise
    ///   [`SyncError::FileSystemCorrupted`].
    pub async fn apply(
        &self,
        project: &ProjectId,
        project_dir: &Path,
        file: &RemoteNode,
    ) -> Result<(), ApplyError> {
        if !file.kind.is_file() {
            return Ok(());
        }

        // Step 1: fetch the bytes. Mapped before any filesystem work so a
        // dead network never leaves ancestors behind.
        let content = self
            .store
            .fetch_project_file(project, &file.path)
            .await
            .map_err(map_transport)?;

        // Step 2: resolve the logical path to a native one.
        validate_components(&file.path)?;
        let target = self
            .fs
            .resolve(project_dir, &file.path)
            .map_err(|e| SyncError::FileSystemCorrupted {
                path: file.path.clone(),
                reason: e.to_string(),
            })?;

        // Step 3: write, creating missing ancestors.
        self.fs
            .write_file_creating_ancestors(&target, &content)
            .await
            .map_err(|e| map_write_error(&file.path, e))?;

        Ok(())
    }
}

fn map_transport(err: TransportError) -> ApplyError {
    match err.into_sync_error() {
        Ok(sync_error) => ApplyError::Exception(sync_error),
        Err(signing) => ApplyError::Halted(signing),
    }
}

/// Rejects path components the local filesystem cannot represent.
fn validate_components(path: &ProjectPath) -> Result<(), SyncError> {
    for component in path.components() {
        if component.chars().any(|c| FORBIDDEN_NAME_CHARS.contains(&c) || c.is_control()) {
            return Err(SyncError::InvalidFilename {
                name: component.to_string(),
            });
        }
    }
    Ok(())
}

fn map_write_error(path: &ProjectPath, err: anyhow::Error) -> SyncError {
    let permission_denied = err
        .downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == ErrorKind::PermissionDenied);

    if permission_denied {
        SyncError::ReadOnlyFilesChanged {
            path: path.clone(),
            reason: err.to_string(),
        }
    } else {
        SyncError::FileSystemCorrupted {
            path: path.clone(),
            reason: format!("Could not write project file ({err})"),
        }
    }
}
