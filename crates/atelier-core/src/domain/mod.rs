//! Domain types and business rules
//!
//! This module contains the core domain types for the Atelier sync client:
//! - Newtypes for validated identifiers, paths, and hashes
//! - Node descriptors, the atomic unit being diffed
//! - Change records classifying a path's difference between two snapshots
//! - Conflict entities for paths that changed on both sides
//! - The closed sync exception taxonomy
//! - The externally observable sync state
//! - Domain-specific error types

pub mod change;
pub mod conflict;
pub mod errors;
pub mod newtypes;
pub mod node;
pub mod state;
pub mod sync_error;

// Re-export commonly used types
pub use change::{LocalChange, LocalChangeKind, RemoteChange, RemoteChangeKind};
pub use conflict::Conflict;
pub use errors::DomainError;
pub use newtypes::{ContentHash, ProjectId, ProjectPath};
pub use node::{LocalNode, NodeKind, PathKeyed, RemoteNode};
pub use state::{Drift, SyncState};
pub use sync_error::SyncError;
