//! Integration tests for transport error classification
//!
//! Verifies that StoreClient maps every failure mode into the closed
//! TransportError set:
//! - 4xx statuses → Client with the response body as message
//! - 5xx statuses → Server
//! - Connection refused → NoNetwork
//! - Missing credentials → UnableToSign before any request is sent

use atelier_core::domain::newtypes::ProjectId;
use atelier_core::ports::TransportError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use atelier_api::StoreClient;

use crate::common;

#[tokio::test]
async fn test_not_found_maps_to_client_error() {
    let (server, client) = common::setup_store_mock().await;

    Mock::given(method("GET"))
        .and(path("/projects/missing/tree"))
        .respond_with(ResponseTemplate::new(404).set_body_string("project not found"))
        .mount(&server)
        .await;

    let project = ProjectId::new("missing").unwrap();
    let err = client.project_tree(&project).await.unwrap_err();

    match err {
        TransportError::Client { message } => assert_eq!(message, "project not found"),
        other => panic!("Expected Client error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_maps_to_server() {
    let (server, client) = common::setup_store_mock().await;

    Mock::given(method("GET"))
        .and(path("/projects/proj-42/tree"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let project = ProjectId::new("proj-42").unwrap();
    let err = client.project_tree(&project).await.unwrap_err();

    match err {
        TransportError::Server { message } => assert_eq!(message, "maintenance"),
        other => panic!("Expected Server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_error_body_falls_back_to_status() {
    let (server, client) = common::setup_store_mock().await;

    Mock::given(method("GET"))
        .and(path("/projects/proj-42/tree"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let project = ProjectId::new("proj-42").unwrap();
    let err = client.project_tree(&project).await.unwrap_err();

    match err {
        TransportError::Server { message } => assert!(message.contains("500")),
        other => panic!("Expected Server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_store_maps_to_no_network() {
    // Bind a listener then drop it so the port refuses connections.
    // (A dropped wiremock MockServer keeps listening: servers are pooled.)
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = StoreClient::new(uri, "test-access-token");
    let project = ProjectId::new("proj-42").unwrap();
    let err = client.project_tree(&project).await.unwrap_err();

    assert!(matches!(err, TransportError::NoNetwork));
}

#[tokio::test]
async fn test_missing_token_fails_without_sending() {
    let server = MockServer::start().await;

    // Zero expected requests: the client must refuse before sending.
    Mock::given(method("GET"))
        .and(path("/projects/proj-42/tree"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "nodes": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let client = StoreClient::unauthenticated(server.uri());
    let project = ProjectId::new("proj-42").unwrap();
    let err = client.project_tree(&project).await.unwrap_err();

    assert!(matches!(err, TransportError::UnableToSign));
}

#[tokio::test]
async fn test_token_refresh_recovers_signing() {
    let (server, mut client) = common::setup_store_mock().await;
    common::mount_tree(&server, "proj-42", serde_json::json!([])).await;

    let project = ProjectId::new("proj-42").unwrap();
    client.set_access_token("rotated-token");

    assert!(client.project_tree(&project).await.is_ok());
}

#[tokio::test]
async fn test_malformed_tree_body_maps_to_client_error() {
    let (server, client) = common::setup_store_mock().await;

    Mock::given(method("GET"))
        .and(path("/projects/proj-42/tree"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let project = ProjectId::new("proj-42").unwrap();
    let err = client.project_tree(&project).await.unwrap_err();

    assert!(matches!(err, TransportError::Client { .. }));
}
