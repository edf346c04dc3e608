//! Observable sync-state cell
//!
//! Holds the current [`SyncState`] of a project behind a `tokio::sync::watch`
//! channel. The engine replaces the value wholesale after each refresh pass;
//! any number of observers (UI, CLI, logs) can read the latest value or await
//! changes without ever seeing a half-updated state.

use atelier_core::domain::state::SyncState;
use tokio::sync::watch;
use tracing::debug;

/// Shared cell publishing the latest sync state of one project
pub struct SyncStateCell {
    tx: watch::Sender<SyncState>,
}

impl SyncStateCell {
    /// Creates a cell holding the initial state (`Synced` with unknown drift)
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SyncState::initial());
        Self { tx }
    }

    /// Replaces the current state
    ///
    /// Observers obtained via [`subscribe`](SyncStateCell::subscribe) are
    /// notified even when the new value equals the old one, so every
    /// completed pass is visible.
    pub fn publish(&self, state: SyncState) {
        debug!(?state, "Publishing sync state");
        self.tx.send_replace(state);
    }

    /// Returns a clone of the current state
    pub fn current(&self) -> SyncState {
        self.tx.borrow().clone()
    }

    /// Creates a receiver that observes every published state
    pub fn subscribe(&self) -> watch::Receiver<SyncState> {
        self.tx.subscribe()
    }
}

impl Default for SyncStateCell {
    fn default() -> Self {
        Self::new()
    }
}
