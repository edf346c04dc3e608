//! Domain error types
//!
//! This module defines error types for validation failures raised when
//! constructing domain values (paths, identifiers, hashes).

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid project-relative path format or content
    #[error("Invalid project path: {0}")]
    InvalidPath(String),

    /// Invalid project identifier
    #[error("Invalid project id: {0}")]
    InvalidProjectId(String),

    /// Invalid content hash format (expected lowercase hex SHA-256)
    #[error("Invalid hash format: {0}")]
    InvalidHash(String),
}
