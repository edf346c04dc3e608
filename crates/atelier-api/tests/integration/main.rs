//! Integration tests for atelier-api
//!
//! Uses wiremock to simulate the project store API and verifies
//! end-to-end behavior of the StoreClient: tree listings, file
//! downloads, and transport error classification.

mod common;

mod test_errors;
mod test_files;
mod test_tree;
