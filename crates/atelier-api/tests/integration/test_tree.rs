//! Integration tests for project tree listings
//!
//! Verifies end-to-end behavior of StoreClient::project_tree against a
//! wiremock-based store mock:
//! - Mixed file/directory listings
//! - Empty projects
//! - Malformed entries are skipped, not fatal
//! - Requests carry the bearer token

use atelier_core::domain::newtypes::ProjectId;
use atelier_core::domain::node::NodeKind;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use atelier_api::StoreClient;

use crate::common;

#[tokio::test]
async fn test_tree_returns_files_and_directories() {
    let (server, client) = common::setup_store_mock().await;

    let nodes = serde_json::json!([
        { "path": "src", "type": "directory" },
        { "path": "src/main.ino", "type": "file", "version": 3 },
        { "path": "lib/util.h", "type": "file", "version": 1 }
    ]);
    common::mount_tree(&server, "proj-42", nodes).await;

    let project = ProjectId::new("proj-42").unwrap();
    let tree = client.project_tree(&project).await.expect("Tree query failed");

    assert_eq!(tree.len(), 3);

    let dir = &tree[0];
    assert_eq!(dir.path.as_str(), "src");
    assert_eq!(dir.kind, NodeKind::Directory);

    let file = &tree[1];
    assert_eq!(file.path.as_str(), "src/main.ino");
    assert_eq!(file.kind, NodeKind::File);
    assert_eq!(file.version, 3);
}

#[tokio::test]
async fn test_tree_empty_project() {
    let (server, client) = common::setup_store_mock().await;
    common::mount_tree(&server, "empty", serde_json::json!([])).await;

    let project = ProjectId::new("empty").unwrap();
    let tree = client.project_tree(&project).await.expect("Tree query failed");

    assert!(tree.is_empty());
}

#[tokio::test]
async fn test_tree_skips_malformed_entries() {
    let (server, client) = common::setup_store_mock().await;

    // One good entry, one path that escapes the project root, one file
    // missing its version. Only the good entry survives.
    let nodes = serde_json::json!([
        { "path": "good.txt", "type": "file", "version": 1 },
        { "path": "../escape.txt", "type": "file", "version": 1 },
        { "path": "no-version.txt", "type": "file" }
    ]);
    common::mount_tree(&server, "proj-42", nodes).await;

    let project = ProjectId::new("proj-42").unwrap();
    let tree = client.project_tree(&project).await.expect("Tree query failed");

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].path.as_str(), "good.txt");
}

#[tokio::test]
async fn test_tree_request_is_signed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/proj-42/tree"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "nodes": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri(), "secret-token");
    let project = ProjectId::new("proj-42").unwrap();
    client.project_tree(&project).await.expect("Tree query failed");
}
