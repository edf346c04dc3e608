//! Conflict detector
//!
//! Intersects a local change-set with a remote change-set by path. Every
//! path both sides touched within the same previous/latest window becomes
//! a [`Conflict`]; content is never inspected or merged here.

use atelier_core::domain::change::{LocalChange, RemoteChange, RemoteChangeKind};
use atelier_core::domain::conflict::Conflict;
use atelier_core::domain::node::PathKeyed;
use tracing::debug;

use crate::pathset;

/// Finds paths changed on both sides
///
/// Returns `None` when no path overlaps; a returned `Vec` is never empty
/// and its size is at most `min(local.len(), remote.len())`. The remote
/// lookup falls back to `NoChange` if no counterpart is found, which the
/// intersection makes unreachable; the guard keeps the fold total.
pub fn detect_conflicts(local: &[LocalChange], remote: &[RemoteChange]) -> Option<Vec<Conflict>> {
    let remote_index = pathset::index(remote);

    let conflicts: Vec<Conflict> = local
        .iter()
        .filter(|change| remote_index.contains_key(change.path()))
        .map(|change| {
            let remote_change = remote_index
                .get(change.path())
                .map(|r| r.change)
                .unwrap_or(RemoteChangeKind::NoChange);
            Conflict::new(change.path.clone(), change.change, remote_change)
        })
        .collect();

    debug!(count = conflicts.len(), "Change-sets intersected");
    if conflicts.is_empty() {
        None
    } else {
        Some(conflicts)
    }
}
