//! Port definitions (hexagonal architecture interfaces)
//!
//! This module defines the port traits that form the boundaries of the
//! hexagonal architecture. Ports are interfaces that the domain core
//! depends on, but whose implementations live in adapter crates.
//!
//! ## Ports Overview
//!
//! - [`ProjectStore`] - Remote project store (tree listing, file content)
//! - [`WorkspaceFs`] - Local project directory (resolve, write, scan)

pub mod project_store;
pub mod workspace_fs;

pub use project_store::{ProjectStore, SigningFailed, TransportError};
pub use workspace_fs::WorkspaceFs;
