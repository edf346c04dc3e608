//! Use cases (interactors) for the Atelier sync core
//!
//! This module contains the application use cases that orchestrate
//! domain values and port interfaces. Use cases are thin coordinators
//! that delegate business rules to domain methods and I/O to ports.
//!
//! ## Use Cases
//!
//! - [`ApplyRemoteFile`] - Fetch one remote file and write it into the
//!   local project directory, mapping every failure into the sync
//!   exception taxonomy

pub mod apply_remote_file;

pub use apply_remote_file::{ApplyError, ApplyRemoteFile};
