//! Domain newtypes with validation
//!
//! This module provides strongly-typed wrappers for domain identifiers and
//! values. Each newtype ensures data validity at construction time, so the
//! rest of the core never has to re-check path shapes or hash formats.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::errors::DomainError;

// ============================================================================
// ProjectId
// ============================================================================

/// Identifier of a project in the remote project store
///
/// The store assigns these; the client treats them as opaque non-empty
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Creates a `ProjectId`, validating that it is non-empty and contains
    /// no whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidProjectId(id));
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProjectId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ============================================================================
// ProjectPath
// ============================================================================

/// A logical, project-relative path with `/` separators
///
/// This is the identity used by every set operation in the diff and
/// conflict machinery: two node descriptors refer to the same entry iff
/// their `ProjectPath`s are equal.
///
/// ## Validation
///
/// A valid path is non-empty, carries no leading or trailing `/`, no empty
/// components, no `.` or `..` components, and no NUL bytes. Escaping the
/// project root is therefore impossible by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectPath(String);

impl ProjectPath {
    /// Creates a `ProjectPath`, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPath` if the path is empty, absolute,
    /// contains empty / `.` / `..` components, or embeds NUL bytes.
    pub fn new(path: impl Into<String>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_empty() || path.contains('\0') {
            return Err(DomainError::InvalidPath(path));
        }
        if path.starts_with('/') || path.ends_with('/') {
            return Err(DomainError::InvalidPath(path));
        }
        if path.split('/').any(|c| c.is_empty() || c == "." || c == "..") {
            return Err(DomainError::InvalidPath(path));
        }
        Ok(Self(path))
    }

    /// Returns the path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the path components, root first
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Returns the final component (the file or directory name)
    pub fn file_name(&self) -> &str {
        // A valid path always has a non-empty final component.
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl Display for ProjectPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProjectPath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ============================================================================
// ContentHash
// ============================================================================

/// SHA-256 content hash, stored as a 64-character lowercase hex string
///
/// Local snapshots carry one per file so the classifier can detect content
/// changes without retaining file bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Creates a `ContentHash` from an existing hex digest string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidHash` unless the string is exactly
    /// 64 lowercase hex characters.
    pub fn new(hex: impl Into<String>) -> Result<Self, DomainError> {
        let hex = hex.into();
        let valid = hex.len() == 64
            && hex
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
        if !valid {
            return Err(DomainError::InvalidHash(hex));
        }
        Ok(Self(hex))
    }

    /// Computes the SHA-256 hash of the given bytes
    pub fn of(bytes: &[u8]) -> Self {
        Self(format!("{:x}", Sha256::digest(bytes)))
    }

    /// Returns the hex digest as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ContentHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
