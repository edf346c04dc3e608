//! Change classifier
//!
//! Computes the added/removed/updated sets between two snapshots of the
//! same side. The remote flavor compares store-assigned version numbers;
//! the local flavor compares content hashes. Both share the same shape:
//!
//! 1. filter both snapshots to file entries (directories are tracked for
//!    tree display elsewhere but never diffed)
//! 2. removed = previous \ latest, added = latest \ previous, updated =
//!    present in both with a differing payload
//! 3. concatenate; callers must not rely on the ordering
//!
//! A path appears in at most one of the three sets per call, and
//! `NoChange` is never emitted.

use atelier_core::domain::change::{LocalChange, LocalChangeKind, RemoteChange, RemoteChangeKind};
use atelier_core::domain::node::{LocalNode, RemoteNode};
use tracing::debug;

use crate::pathset;

/// Classifies remote-side changes between two snapshots
///
/// Returns `None` when nothing differs; a returned `Vec` is never empty.
pub fn classify_remote(previous: &[RemoteNode], latest: &[RemoteNode]) -> Option<Vec<RemoteChange>> {
    let previous_files: Vec<&RemoteNode> =
        previous.iter().filter(|n| n.kind.is_file()).collect();
    let latest_files: Vec<&RemoteNode> = latest.iter().filter(|n| n.kind.is_file()).collect();

    let mut changes: Vec<RemoteChange> = Vec::new();

    for node in pathset::difference(&previous_files, &latest_files) {
        changes.push(RemoteChange {
            path: node.path.clone(),
            kind: node.kind,
            change: RemoteChangeKind::Removed,
        });
    }

    for node in pathset::difference(&latest_files, &previous_files) {
        changes.push(RemoteChange {
            path: node.path.clone(),
            kind: node.kind,
            change: RemoteChangeKind::Added {
                version: node.version,
            },
        });
    }

    for (old, new) in pathset::intersection(&previous_files, &latest_files) {
        if old.version != new.version {
            changes.push(RemoteChange {
                path: new.path.clone(),
                kind: new.kind,
                change: RemoteChangeKind::Updated {
                    version: new.version,
                },
            });
        }
    }

    debug!(count = changes.len(), "Remote snapshot pair classified");
    if changes.is_empty() {
        None
    } else {
        Some(changes)
    }
}

/// Classifies local-side changes between two snapshots
///
/// Hash differences are detected but not retained in the change records.
/// Returns `None` when nothing differs; a returned `Vec` is never empty.
pub fn classify_local(previous: &[LocalNode], latest: &[LocalNode]) -> Option<Vec<LocalChange>> {
    let previous_files: Vec<&LocalNode> = previous.iter().filter(|n| n.kind.is_file()).collect();
    let latest_files: Vec<&LocalNode> = latest.iter().filter(|n| n.kind.is_file()).collect();

    let mut changes: Vec<LocalChange> = Vec::new();

    for node in pathset::difference(&previous_files, &latest_files) {
        changes.push(LocalChange {
            path: node.path.clone(),
            kind: node.kind,
            change: LocalChangeKind::Removed,
        });
    }

    for node in pathset::difference(&latest_files, &previous_files) {
        changes.push(LocalChange {
            path: node.path.clone(),
            kind: node.kind,
            change: LocalChangeKind::Added,
        });
    }

    for (old, new) in pathset::intersection(&previous_files, &latest_files) {
        if old.hash != new.hash {
            changes.push(LocalChange {
                path: new.path.clone(),
                kind: new.kind,
                change: LocalChangeKind::Updated,
            });
        }
    }

    debug!(count = changes.len(), "Local snapshot pair classified");
    if changes.is_empty() {
        None
    } else {
        Some(changes)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use atelier_core::domain::newtypes::{ContentHash, ProjectPath};

    use super::*;

    fn path(s: &str) -> ProjectPath {
        ProjectPath::new(s).unwrap()
    }

    fn remote(p: &str, version: u64) -> RemoteNode {
        RemoteNode::file(path(p), version)
    }

    fn local(p: &str, content: &[u8]) -> LocalNode {
        LocalNode::file(path(p), ContentHash::of(content))
    }

    mod remote_tests {
        use super::*;

        #[test]
        fn test_removed_entry() {
            // Scenario: a versioned file disappears from the latest snapshot.
            let previous = vec![remote("a.txt", 1)];
            let latest = vec![];

            let changes = classify_remote(&previous, &latest).unwrap();
            assert_eq!(changes.len(), 1);
            assert_eq!(changes[0].path.as_str(), "a.txt");
            assert_eq!(changes[0].change, RemoteChangeKind::Removed);
        }

        #[test]
        fn test_added_entry_carries_version() {
            let previous = vec![];
            let latest = vec![remote("new.txt", 4)];

            let changes = classify_remote(&previous, &latest).unwrap();
            assert_eq!(changes.len(), 1);
            assert_eq!(changes[0].change, RemoteChangeKind::Added { version: 4 });
        }

        #[test]
        fn test_updated_entry_carries_new_version() {
            let previous = vec![remote("a.txt", 2)];
            let latest = vec![remote("a.txt", 3)];

            let changes = classify_remote(&previous, &latest).unwrap();
            assert_eq!(changes.len(), 1);
            assert_eq!(changes[0].change, RemoteChangeKind::Updated { version: 3 });
        }

        #[test]
        fn test_same_version_is_no_change() {
            let previous = vec![remote("a.txt", 2)];
            let latest = vec![remote("a.txt", 2)];

            assert!(classify_remote(&previous, &latest).is_none());
        }

        #[test]
        fn test_identical_snapshots_yield_none() {
            let snapshot = vec![remote("a.txt", 1), remote("b/c.txt", 7)];
            assert!(classify_remote(&snapshot, &snapshot).is_none());
        }

        #[test]
        fn test_directories_are_excluded() {
            let previous = vec![RemoteNode::directory(path("src"), 1)];
            let latest = vec![RemoteNode::directory(path("src"), 2)];

            // A directory-only change never surfaces.
            assert!(classify_remote(&previous, &latest).is_none());
        }

        #[test]
        fn test_sets_are_pairwise_disjoint() {
            let previous = vec![remote("keep.txt", 1), remote("gone.txt", 1), remote("bump.txt", 1)];
            let latest = vec![remote("keep.txt", 1), remote("bump.txt", 2), remote("new.txt", 1)];

            let changes = classify_remote(&previous, &latest).unwrap();
            let paths: Vec<&str> = changes.iter().map(|c| c.path.as_str()).collect();
            let unique: HashSet<&&str> = paths.iter().collect();
            assert_eq!(paths.len(), unique.len());
            assert_eq!(changes.len(), 3);
        }

        #[test]
        fn test_completeness_over_mixed_snapshot() {
            let previous = vec![remote("removed.txt", 1), remote("updated.txt", 1)];
            let latest = vec![remote("updated.txt", 2), remote("added.txt", 1)];

            let changes = classify_remote(&previous, &latest).unwrap();

            let find = |p: &str| {
                changes
                    .iter()
                    .find(|c| c.path.as_str() == p)
                    .map(|c| c.change)
            };
            assert_eq!(find("removed.txt"), Some(RemoteChangeKind::Removed));
            assert_eq!(find("added.txt"), Some(RemoteChangeKind::Added { version: 1 }));
            assert_eq!(
                find("updated.txt"),
                Some(RemoteChangeKind::Updated { version: 2 })
            );
        }

        #[test]
        fn test_never_emits_no_change() {
            let previous = vec![remote("a.txt", 1), remote("b.txt", 3)];
            let latest = vec![remote("a.txt", 1), remote("b.txt", 4)];

            let changes = classify_remote(&previous, &latest).unwrap();
            assert!(changes
                .iter()
                .all(|c| c.change != RemoteChangeKind::NoChange));
        }
    }

    mod local_tests {
        use super::*;

        #[test]
        fn test_hash_change_is_updated() {
            // Scenario: same path, different content hash.
            let previous = vec![local("a.txt", b"h1")];
            let latest = vec![local("a.txt", b"h2")];

            let changes = classify_local(&previous, &latest).unwrap();
            assert_eq!(changes.len(), 1);
            assert_eq!(changes[0].path.as_str(), "a.txt");
            assert_eq!(changes[0].change, LocalChangeKind::Updated);
        }

        #[test]
        fn test_same_hash_is_no_change() {
            let previous = vec![local("a.txt", b"same")];
            let latest = vec![local("a.txt", b"same")];
            assert!(classify_local(&previous, &latest).is_none());
        }

        #[test]
        fn test_added_and_removed() {
            let previous = vec![local("old.txt", b"x")];
            let latest = vec![local("new.txt", b"y")];

            let changes = classify_local(&previous, &latest).unwrap();
            assert_eq!(changes.len(), 2);

            let find = |p: &str| {
                changes
                    .iter()
                    .find(|c| c.path.as_str() == p)
                    .map(|c| c.change)
            };
            assert_eq!(find("old.txt"), Some(LocalChangeKind::Removed));
            assert_eq!(find("new.txt"), Some(LocalChangeKind::Added));
        }

        #[test]
        fn test_directories_are_excluded() {
            let previous = vec![LocalNode::directory(path("assets"))];
            let latest = vec![];
            assert!(classify_local(&previous, &latest).is_none());
        }

        #[test]
        fn test_unsorted_snapshots() {
            let previous = vec![local("b.txt", b"1"), local("a.txt", b"1")];
            let latest = vec![local("a.txt", b"2"), local("b.txt", b"1")];

            let changes = classify_local(&previous, &latest).unwrap();
            assert_eq!(changes.len(), 1);
            assert_eq!(changes[0].path.as_str(), "a.txt");
        }
    }
}
