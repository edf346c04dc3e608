//! Change classification and conflict detection
//!
//! Pure, synchronous set operations over project-tree snapshots:
//! - [`classify_remote`] / [`classify_local`] reduce a previous/latest
//!   snapshot pair to a change-set for one side
//! - [`detect_conflicts`] intersects the two change-sets to find paths
//!   both sides touched
//!
//! Everything here is deterministic, free of I/O, and safe to call from
//! any thread.

pub mod classify;
pub mod detect;
pub mod pathset;

pub use classify::{classify_local, classify_remote};
pub use detect::detect_conflicts;
