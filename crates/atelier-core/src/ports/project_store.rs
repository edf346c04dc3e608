//! Project store port (driven/secondary port)
//!
//! This module defines the interface for the remote project store. The
//! primary implementation talks to the Atelier HTTP API, but the trait is
//! transport-agnostic.
//!
//! ## Design Notes
//!
//! - Store methods return [`TransportError`], a closed pre-mapping error
//!   set; the file-apply pipeline translates it into the domain
//!   [`SyncError`](crate::domain::SyncError) taxonomy at its boundary.
//! - Uses `#[async_trait]` for async trait methods.
//! - Retry/backoff policy does not live behind this port; callers receive
//!   the classified error and decide.

use thiserror::Error;

use crate::domain::newtypes::{ProjectId, ProjectPath};
use crate::domain::node::RemoteNode;
use crate::domain::sync_error::SyncError;

/// A failure reported by the project store, before mapping into the sync
/// exception taxonomy
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// No connectivity at all (DNS, connect, timeout)
    #[error("No network")]
    NoNetwork,

    /// The store rejected the request (HTTP 4xx)
    #[error("Client error: {message}")]
    Client { message: String },

    /// The store failed to serve the request (HTTP 5xx)
    #[error("Server error: {message}")]
    Server { message: String },

    /// The request could not be signed (missing or stale credentials)
    #[error("Request could not be signed")]
    UnableToSign,
}

/// Raised when a request cannot be signed
///
/// Not part of the recoverable taxonomy: missing credentials mean the
/// orchestrator violated a precondition, so the current sync attempt must
/// halt instead of surfacing a retryable exception.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Could not sign request to the project store; credentials are missing or stale")]
pub struct SigningFailed;

impl TransportError {
    /// Maps this transport failure into the sync exception taxonomy.
    ///
    /// Total over all variants. `UnableToSign` is the one case that is not
    /// representable as a recoverable [`SyncError`] and instead yields
    /// [`SigningFailed`].
    pub fn into_sync_error(self) -> Result<SyncError, SigningFailed> {
        match self {
            TransportError::NoNetwork => Ok(SyncError::Network {
                reason: "No network".to_string(),
            }),
            TransportError::Client { message } | TransportError::Server { message } => {
                Ok(SyncError::Network { reason: message })
            }
            TransportError::UnableToSign => Err(SigningFailed),
        }
    }
}

/// Port trait for remote project store operations
///
/// Implementations handle request signing, endpoint construction, and the
/// mapping of HTTP/connectivity failures into [`TransportError`].
#[async_trait::async_trait]
pub trait ProjectStore: Send + Sync {
    /// Fetches the latest file tree of a project
    ///
    /// # Arguments
    /// * `project` - The project whose tree to list
    ///
    /// # Returns
    /// One node descriptor per entry, files and directories alike
    async fn fetch_project_tree(
        &self,
        project: &ProjectId,
    ) -> Result<Vec<RemoteNode>, TransportError>;

    /// Fetches the raw bytes of one project file
    ///
    /// # Arguments
    /// * `project` - The project the file belongs to
    /// * `path` - Project-relative path of the file
    async fn fetch_project_file(
        &self,
        project: &ProjectId,
        path: &ProjectPath,
    ) -> Result<Vec<u8>, TransportError>;
}
