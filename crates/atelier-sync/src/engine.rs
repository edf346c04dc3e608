//! Refresh-pass engine
//!
//! The [`SyncEngine`] orchestrates one project's pull-based synchronization.
//!
//! ## Refresh Flow
//!
//! 1. **Observe**: Fetch the remote tree and scan the local project directory
//! 2. **Classify**: Diff both sides against the snapshots from the last pass
//! 3. **Check**: Intersect the change-sets; any overlap is a conflict
//! 4. **Apply**: Fetch and write remote additions and updates, one at a time
//! 5. **Publish**: Replace the observable [`SyncState`] wholesale
//!
//! The very first pass diffs against empty snapshots, so every remote file
//! counts as added and gets downloaded: an initial checkout. A project
//! directory that already holds files at paths the store also has will
//! surface as conflicting changes, since there is no common baseline to
//! tell the copies apart.
//!
//! A pass that ends in an exception leaves the snapshots untouched, so the
//! condition is re-detected on the next pass until it clears or the user
//! intervenes. The one exception to that rule are the engine's own writes:
//! files it applied before a failure are folded into the local snapshot
//! immediately, otherwise the next pass would classify them as local edits
//! and report a conflict that outlives the original failure. A signing
//! failure aborts the pass entirely and is returned to the caller, since no
//! request can succeed without credentials.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use atelier_core::domain::change::{LocalChange, RemoteChange, RemoteChangeKind};
use atelier_core::domain::newtypes::{ProjectId, ProjectPath};
use atelier_core::domain::node::{LocalNode, RemoteNode};
use atelier_core::domain::state::{Drift, SyncState};
use atelier_core::domain::sync_error::SyncError;
use atelier_core::ports::project_store::{ProjectStore, SigningFailed};
use atelier_core::ports::workspace_fs::WorkspaceFs;
use atelier_core::usecases::apply_remote_file::{ApplyError, ApplyRemoteFile};
use atelier_diff::{classify_local, classify_remote, detect_conflicts};

use crate::state::SyncStateCell;

/// Snapshots retained from the last successful pass
struct Baseline {
    remote: Vec<RemoteNode>,
    local: Vec<LocalNode>,
}

impl Baseline {
    /// The pre-first-pass baseline: nothing known on either side
    fn empty() -> Self {
        Self {
            remote: Vec::new(),
            local: Vec::new(),
        }
    }
}

/// What the apply phase managed to do before finishing or failing
#[derive(Default)]
struct ApplyOutcome {
    /// Paths written to disk, in apply order
    applied: Vec<ProjectPath>,
    /// The failure that stopped the phase, if any
    failure: Option<ApplyError>,
}

/// Pull-based synchronization engine for one project
///
/// ## Dependencies
///
/// - `store`: Remote tree listings and file content ([`ProjectStore`])
/// - `fs`: Local scanning and writes ([`WorkspaceFs`])
/// - `state`: Observable cell the engine publishes into after every pass
pub struct SyncEngine {
    project: ProjectId,
    project_dir: PathBuf,
    store: Arc<dyn ProjectStore>,
    fs: Arc<dyn WorkspaceFs>,
    apply: ApplyRemoteFile,
    state: Arc<SyncStateCell>,
    baseline: Baseline,
}

impl SyncEngine {
    /// Creates a new `SyncEngine` with the given dependencies
    pub fn new(
        project: ProjectId,
        project_dir: PathBuf,
        store: Arc<dyn ProjectStore>,
        fs: Arc<dyn WorkspaceFs>,
        state: Arc<SyncStateCell>,
    ) -> Self {
        let apply = ApplyRemoteFile::new(store.clone(), fs.clone());
        Self {
            project,
            project_dir,
            store,
            fs,
            apply,
            state,
            baseline: Baseline::empty(),
        }
    }

    /// The cell this engine publishes into
    pub fn state(&self) -> &Arc<SyncStateCell> {
        &self.state
    }

    /// Runs one refresh pass and publishes the resulting state
    ///
    /// # Errors
    ///
    /// Returns [`SigningFailed`] when the store rejects the credentials;
    /// every other failure is absorbed into the published
    /// [`SyncState::Exception`].
    #[instrument(skip(self), fields(project = %self.project))]
    pub async fn refresh(&mut self) -> Result<SyncState, SigningFailed> {
        info!("Refresh pass starting");

        if !self.project_dir_exists().await {
            return Ok(self.publish_exception(SyncError::ProjectDirMissing));
        }

        let latest_remote = match self.store.fetch_project_tree(&self.project).await {
            Ok(tree) => tree,
            Err(transport) => {
                return match transport.into_sync_error() {
                    Ok(error) => Ok(self.publish_exception(error)),
                    Err(signing) => {
                        warn!("Refresh aborted: unable to sign store requests");
                        Err(signing)
                    }
                };
            }
        };

        let latest_local = match self.fs.scan(&self.project_dir).await {
            Ok(snapshot) => snapshot,
            Err(err) => return Ok(self.publish_exception(self.scan_failure(err))),
        };

        let remote_changes = classify_remote(&self.baseline.remote, &latest_remote);
        let local_changes = classify_local(&self.baseline.local, &latest_local);

        if let (Some(local), Some(remote)) = (&local_changes, &remote_changes) {
            if let Some(conflicts) = detect_conflicts(local, remote) {
                warn!(count = conflicts.len(), "Conflicting changes detected");
                return Ok(self.publish_exception(SyncError::ConflictingChanges));
            }
        }

        let outcome = self.apply_remote_changes(&remote_changes, &latest_remote).await;
        let applied = outcome.applied.len() as u32;

        // Applied writes must land in the baseline, otherwise the next pass
        // would re-classify them as local edits. This holds even when the
        // apply phase failed partway: the files already written are the
        // store's content, not the user's.
        let rescan = if applied > 0 {
            match self.fs.scan(&self.project_dir).await {
                Ok(snapshot) => Some(snapshot),
                Err(err) => return Ok(self.publish_exception(self.scan_failure(err))),
            }
        } else {
            None
        };

        if let Some(failure) = outcome.failure {
            if let Some(rescan) = &rescan {
                self.absorb_applied(&outcome.applied, rescan);
            }
            return match failure {
                ApplyError::Exception(error) => Ok(self.publish_exception(error)),
                ApplyError::Halted(signing) => {
                    warn!("Refresh aborted mid-apply: unable to sign store requests");
                    Err(signing)
                }
            };
        }

        let drift = drift_after_pass(&local_changes, &remote_changes);
        self.baseline = Baseline {
            remote: latest_remote,
            local: rescan.unwrap_or(latest_local),
        };

        info!(applied, ?drift, "Refresh pass complete");
        Ok(self.publish(SyncState::synced(drift)))
    }

    /// Applies every remote addition and update, stopping at the first
    /// failure but keeping the record of what was already written
    async fn apply_remote_changes(
        &self,
        changes: &Option<Vec<RemoteChange>>,
        latest_remote: &[RemoteNode],
    ) -> ApplyOutcome {
        let mut outcome = ApplyOutcome::default();
        let Some(changes) = changes else {
            return outcome;
        };

        for change in changes.iter().filter(|c| c.needs_apply()) {
            let Some(node) = latest_remote.iter().find(|n| n.path == change.path) else {
                // Classifier output always comes from latest_remote.
                warn!(path = %change.path, "Change without a tree entry, skipping");
                continue;
            };

            debug!(path = %change.path, change = ?change.change, "Applying remote change");
            match self.apply.apply(&self.project, &self.project_dir, node).await {
                Ok(()) => outcome.applied.push(change.path.clone()),
                Err(failure) => {
                    outcome.failure = Some(failure);
                    break;
                }
            }
        }

        outcome
    }

    /// Folds this pass's own writes into the local snapshot after a failed
    /// apply phase, so a later pass does not mistake them for user edits
    fn absorb_applied(&mut self, applied: &[ProjectPath], rescan: &[LocalNode]) {
        for path in applied {
            if let Some(node) = rescan.iter().find(|n| &n.path == path) {
                self.baseline.local.retain(|n| &n.path != path);
                self.baseline.local.push(node.clone());
            }
        }
    }

    async fn project_dir_exists(&self) -> bool {
        tokio::fs::metadata(&self.project_dir)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }

    /// Maps a scan failure onto the error taxonomy, attributing it to the
    /// project directory itself
    fn scan_failure(&self, err: anyhow::Error) -> SyncError {
        let dir_name = self
            .project_dir
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| ProjectPath::new(n).ok());

        match dir_name {
            Some(path) => SyncError::FileSystemCorrupted {
                path,
                reason: format!("Could not scan project directory ({err})"),
            },
            None => SyncError::ProjectDirMissing,
        }
    }

    fn publish_exception(&self, error: SyncError) -> SyncState {
        warn!(%error, "Refresh pass failed");
        self.publish(SyncState::exception(error))
    }

    fn publish(&self, state: SyncState) -> SyncState {
        self.state.publish(state.clone());
        state
    }
}

/// Computes residual drift once a pass has applied what it can
///
/// Local changes are never pushed, so any local change leaves local drift.
/// Remote removals are detected but not applied, leaving remote drift.
fn drift_after_pass(
    local: &Option<Vec<LocalChange>>,
    remote: &Option<Vec<RemoteChange>>,
) -> Drift {
    let local_residual = local.is_some();
    let remote_residual = remote.as_ref().is_some_and(|changes| {
        changes
            .iter()
            .any(|c| c.change == RemoteChangeKind::Removed)
    });

    match (local_residual, remote_residual) {
        (true, true) => Drift::Both,
        (false, true) => Drift::Remote,
        (true, false) => Drift::Local,
        (false, false) => Drift::Unknown,
    }
}
