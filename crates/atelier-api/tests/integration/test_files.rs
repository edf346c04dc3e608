//! Integration tests for project file downloads

use atelier_core::domain::newtypes::{ProjectId, ProjectPath};

use crate::common;

#[tokio::test]
async fn test_file_download_returns_bytes() {
    let (server, client) = common::setup_store_mock().await;
    common::mount_file(&server, "proj-42", "src/main.ino", b"void setup() {}").await;

    let project = ProjectId::new("proj-42").unwrap();
    let path = ProjectPath::new("src/main.ino").unwrap();

    let bytes = client
        .project_file(&project, &path)
        .await
        .expect("File download failed");
    assert_eq!(bytes, b"void setup() {}");
}

#[tokio::test]
async fn test_file_download_empty_file() {
    let (server, client) = common::setup_store_mock().await;
    common::mount_file(&server, "proj-42", "empty.txt", b"").await;

    let project = ProjectId::new("proj-42").unwrap();
    let path = ProjectPath::new("empty.txt").unwrap();

    let bytes = client
        .project_file(&project, &path)
        .await
        .expect("File download failed");
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_file_download_nested_path() {
    let (server, client) = common::setup_store_mock().await;
    common::mount_file(&server, "proj-42", "a/b/c/deep.txt", b"depth").await;

    let project = ProjectId::new("proj-42").unwrap();
    let path = ProjectPath::new("a/b/c/deep.txt").unwrap();

    let bytes = client
        .project_file(&project, &path)
        .await
        .expect("File download failed");
    assert_eq!(bytes, b"depth");
}
