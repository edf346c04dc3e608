//! Atelier project store API client
//!
//! HTTP adapter implementing the [`ProjectStore`](atelier_core::ports::ProjectStore)
//! port against the Atelier REST API. All HTTP and connectivity failures
//! are mapped into the closed
//! [`TransportError`](atelier_core::ports::TransportError) set before they
//! leave this crate.

pub mod client;

pub use client::StoreClient;
