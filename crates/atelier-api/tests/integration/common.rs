//! Shared test helpers for store API integration tests
//!
//! Provides wiremock-based mock server setup for the project store
//! endpoints. Each helper mounts the necessary mock endpoints and
//! returns a configured StoreClient pointing at the mock server.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use atelier_api::StoreClient;

/// Starts a mock store server and returns a (MockServer, StoreClient)
/// tuple with a valid test token.
pub async fn setup_store_mock() -> (MockServer, StoreClient) {
    let server = MockServer::start().await;
    let client = StoreClient::new(server.uri(), "test-access-token");
    (server, client)
}

/// Mounts a tree endpoint for `project_id` returning the given node list.
pub async fn mount_tree(server: &MockServer, project_id: &str, nodes: serde_json::Value) {
    let path_str = format!("/projects/{project_id}/tree");
    Mock::given(method("GET"))
        .and(path(&path_str))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "nodes": nodes })),
        )
        .mount(server)
        .await;
}

/// Mounts a file download endpoint for one project file.
pub async fn mount_file(server: &MockServer, project_id: &str, file_path: &str, content: &[u8]) {
    let path_str = format!("/projects/{project_id}/files/{file_path}");
    Mock::given(method("GET"))
        .and(path(&path_str))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(content.to_vec())
                .append_header("Content-Type", "application/octet-stream"),
        )
        .mount(server)
        .await;
}
