//! Path-keyed set utilities
//!
//! Generic difference/intersection helpers over anything [`PathKeyed`],
//! so every diff operation in the engine compares on exactly the same
//! identity: the logical [`ProjectPath`]. All helpers index one side in a
//! hash map, keeping the work near O(n + m) instead of nested scans.

use std::collections::HashMap;

use atelier_core::domain::newtypes::ProjectPath;
use atelier_core::domain::node::PathKeyed;

/// Builds a path-to-item index over `items`
///
/// Snapshots guarantee unique paths, so a later duplicate would silently
/// win; callers uphold the uniqueness invariant.
pub fn index<T: PathKeyed>(items: &[T]) -> HashMap<&ProjectPath, &T> {
    items.iter().map(|item| (item.path(), item)).collect()
}

/// Items of `left` whose path does not occur in `right`
pub fn difference<'a, A, B>(left: &'a [A], right: &[B]) -> Vec<&'a A>
where
    A: PathKeyed,
    B: PathKeyed,
{
    let right_index = index(right);
    left.iter()
        .filter(|item| !right_index.contains_key(item.path()))
        .collect()
}

/// Pairs of items from `left` and `right` that share a path
///
/// Output order follows `left`.
pub fn intersection<'a, 'b, A, B>(left: &'a [A], right: &'b [B]) -> Vec<(&'a A, &'b B)>
where
    A: PathKeyed,
    B: PathKeyed,
{
    let right_index = index(right);
    left.iter()
        .filter_map(|item| right_index.get(item.path()).map(|other| (item, *other)))
        .collect()
}
