use axum::http::StatusCode;
use client::{ClientError, LawyerApi};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, ConsultationRequest};

use crate::common::{self, MockBackend, Reply, TEST_TOKEN};

#[tokio::test]
async fn test_list_lawyers_decodes_envelope_in_order() {
    let server = common::spawn_backend(MockBackend::default()).await;
    let lawyers = server.client().list_lawyers().await.unwrap();
    let ids: Vec<&str> = lawyers.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["L1", "L2", "L3", "L4"]);
    assert_eq!(lawyers[0].years_experience, Some(12.0));
    assert_eq!(lawyers[2].fee, Some(0.0));
    assert_eq!(lawyers[3].fee, None);
}

#[tokio::test]
async fn test_missing_list_field_is_empty() {
    let server = common::spawn_backend(MockBackend {
        lawyers: Reply::ok(json!({})),
        connections: Reply::ok(json!({ "connections": null })),
        ..MockBackend::default()
    })
    .await;
    let client = server.client();
    assert!(client.list_lawyers().await.unwrap().is_empty());
    assert!(client.my_connections().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_bearer_token_sent_on_every_call() {
    let server = common::spawn_backend(MockBackend::default()).await;
    let client = server.client();
    client.list_lawyers().await.unwrap();
    client.my_connections().await.unwrap();
    client.my_requests().await.unwrap();
    client
        .request_consultation(&ConsultationRequest::new("L2", "hello"))
        .await
        .unwrap();

    let expected = format!("Bearer {TEST_TOKEN}");
    let requests = server.requests();
    assert_eq!(requests.len(), 4);
    for recorded in requests {
        assert_eq!(recorded.authorization.as_deref(), Some(expected.as_str()));
    }
}

#[tokio::test]
async fn test_no_token_no_header() {
    let server = common::spawn_backend(MockBackend::default()).await;
    let client = client::HttpClient::new(server.base_url.clone());
    client.list_lawyers().await.unwrap();
    assert_eq!(server.requests()[0].authorization, None);
}

#[tokio::test]
async fn test_request_body_shape() {
    let server = common::spawn_backend(MockBackend::default()).await;
    server
        .client()
        .request_consultation(&ConsultationRequest::new("L3", "Please call me"))
        .await
        .unwrap();
    let body = server.requests()[0].body.clone().unwrap();
    assert_eq!(body, json!({ "to": "L3", "message": "Please call me" }));
    assert_eq!(server.sent(), vec!["L3".to_string()]);
}

#[tokio::test]
async fn test_error_body_decoded_into_app_error() {
    let server = common::spawn_backend(MockBackend {
        lawyers: Reply::error(StatusCode::UNAUTHORIZED, "Token expired"),
        ..MockBackend::default()
    })
    .await;
    let err = server.client().list_lawyers().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    match err {
        ClientError::Api { error, .. } => {
            assert_eq!(error.kind, AppErrorKind::Unauthorized);
            assert_eq!(error.message, "Token expired");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_backend_is_http_error() {
    let client = client::HttpClient::new("http://127.0.0.1:1");
    let err = client.list_lawyers().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert_eq!(err.status(), None);
}
