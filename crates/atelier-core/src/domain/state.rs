//! Sync state
//!
//! The one piece of state that persists across refresh cycles: the
//! externally observable summary of a project's synchronization status.
//! The orchestrator replaces it wholesale after each pass, so a concurrent
//! reader always sees a complete, self-consistent value.

use serde::{Deserialize, Serialize};

use super::sync_error::SyncError;

/// Which side(s) still carry un-applied drift after a successful pass
///
/// Drift describes what the pass that produced it observed; it is not a
/// cumulative ledger. Once a pass has taken the latest snapshots as its new
/// baseline, a later quiet pass reports [`Drift::Unknown`] even though the
/// sides have not converged (local changes are never uploaded and remote
/// removals are never applied). Observers must not read `Unknown` as
/// "fully in sync".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Drift {
    /// Both sides hold changes the other has not absorbed
    Both,
    /// The remote side holds changes not yet applied locally
    Remote,
    /// The local side holds changes not yet delivered to the store
    Local,
    /// No drift is known (initial value, or a pass that left nothing
    /// pending)
    Unknown,
}

/// Result of the most recent sync pass for a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum SyncState {
    /// The last sync attempt failed
    Exception { error: SyncError },
    /// The last sync pass succeeded, possibly with known residual drift
    Synced { drift: Drift },
}

impl SyncState {
    /// Initial state before any pass has run
    pub fn initial() -> Self {
        SyncState::Synced {
            drift: Drift::Unknown,
        }
    }

    /// Wraps a sync failure
    pub fn exception(error: SyncError) -> Self {
        SyncState::Exception { error }
    }

    /// Wraps a successful pass
    pub fn synced(drift: Drift) -> Self {
        SyncState::Synced { drift }
    }

    /// Returns true if the last attempt failed
    pub fn is_exception(&self) -> bool {
        matches!(self, SyncState::Exception { .. })
    }
}

impl Default for SyncState {
    fn default() -> Self {
        Self::initial()
    }
}
