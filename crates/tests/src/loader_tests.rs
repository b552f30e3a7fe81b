use axum::http::StatusCode;
use client::load_directory;
use pretty_assertions::assert_eq;

use crate::common::{self, MockBackend, Reply};

#[tokio::test]
async fn test_load_is_sequential_roster_first() {
    let server = common::spawn_backend(MockBackend {
        sent: vec!["L3".into()],
        ..MockBackend::default()
    })
    .await;
    let dir = load_directory(&server.client()).await;
    assert_eq!(
        server.paths(),
        vec![
            "/api/lawyers/list",
            "/api/lawyers/connections/me",
            "/api/lawyers/my-requests"
        ]
    );
    assert_eq!(dir.roster.len(), 4);
    assert_eq!(dir.connections.len(), 2);
    assert!(dir.sent.contains("L3"));
}

#[tokio::test]
async fn test_roster_failure_leaves_directory_empty() {
    let server = common::spawn_backend(MockBackend {
        lawyers: Reply::error(StatusCode::INTERNAL_SERVER_ERROR, "db down"),
        ..MockBackend::default()
    })
    .await;
    let dir = load_directory(&server.client()).await;
    assert!(dir.is_empty());
    assert!(dir.sent.is_empty());
    assert_eq!(server.paths(), vec!["/api/lawyers/list"]);
}

#[tokio::test]
async fn test_connections_failure_keeps_roster() {
    let server = common::spawn_backend(MockBackend {
        connections: Reply::error(StatusCode::UNAUTHORIZED, "login required"),
        ..MockBackend::default()
    })
    .await;
    let dir = load_directory(&server.client()).await;
    assert_eq!(dir.roster.len(), 4);
    assert!(dir.connections.is_empty());
}

#[tokio::test]
async fn test_request_list_failure_is_not_fatal() {
    let server = common::spawn_backend(MockBackend {
        my_requests_failure: Some(StatusCode::NOT_FOUND),
        sent: vec!["L2".into()],
        ..MockBackend::default()
    })
    .await;
    let dir = load_directory(&server.client()).await;
    assert_eq!(dir.roster.len(), 4);
    assert!(dir.sent.is_empty());
}
