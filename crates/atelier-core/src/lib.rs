//! Atelier Core - Domain logic and business rules
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain types** - node descriptors, change-sets, conflicts, sync state,
//!   and the closed sync exception taxonomy
//! - **Use cases** - `ApplyRemoteFile`, the pipeline that turns a remote file
//!   descriptor into a local filesystem mutation
//! - **Port definitions** - Traits for adapters: `ProjectStore`, `WorkspaceFs`
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure data types with no external dependencies.
//! Ports define trait interfaces that adapter crates implement. Use cases
//! orchestrate domain values through port interfaces.

pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;
