use axum::http::StatusCode;
use client::dispatch::{DUPLICATE_REQUEST_MESSAGE, GENERIC_FAILURE_MESSAGE};
use client::loader::load_sent_requests;
use client::{
    send_consultation_request, DispatchError, RequestButton, RequestDispatcher, RequestFailure,
};
use pretty_assertions::assert_eq;
use shared_types::DEFAULT_REQUEST_MESSAGE;

use crate::common::{self, MockBackend};

#[tokio::test]
async fn test_successful_request_flow() {
    let server = common::spawn_backend(MockBackend::default()).await;
    let api = server.client();
    let mut dispatcher = RequestDispatcher::default();

    dispatcher.begin("L2").unwrap();
    assert_eq!(dispatcher.button("L2"), RequestButton::Sending);

    send_consultation_request(&api, "L2", DEFAULT_REQUEST_MESSAGE)
        .await
        .unwrap();
    dispatcher.succeed("L2");
    assert_eq!(dispatcher.button("L2"), RequestButton::Sending);

    assert!(dispatcher.settle("L2"));
    assert_eq!(dispatcher.button("L2"), RequestButton::Sent);
    assert_eq!(server.sent(), vec!["L2".to_string()]);

    let canonical = load_sent_requests(&api).await;
    assert!(canonical.contains("L2"));
}

#[tokio::test]
async fn test_second_request_while_in_flight_is_blocked() {
    let server = common::spawn_backend(MockBackend::default()).await;
    let mut dispatcher = RequestDispatcher::default();

    dispatcher.begin("L1").unwrap();
    assert_eq!(
        dispatcher.begin("L1"),
        Err(DispatchError::InFlight("L1".into()))
    );
    // Nothing reached the backend.
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_switching_lawyers_mid_request_cannot_resend_the_first() {
    let server = common::spawn_backend(MockBackend::default()).await;
    let mut dispatcher = RequestDispatcher::default();

    dispatcher.begin("L1").unwrap();
    assert_eq!(
        dispatcher.begin("L2"),
        Err(DispatchError::Busy("L1".into()))
    );
    assert_eq!(
        dispatcher.begin("L1"),
        Err(DispatchError::InFlight("L1".into()))
    );
    assert_eq!(dispatcher.button("L1"), RequestButton::Sending);
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_duplicate_request_maps_to_duplicate_message() {
    let server = common::spawn_backend(MockBackend {
        sent: vec!["L3".into()],
        ..MockBackend::default()
    })
    .await;
    let mut dispatcher = RequestDispatcher::default();

    dispatcher.begin("L3").unwrap();
    let failure = send_consultation_request(&server.client(), "L3", "hi")
        .await
        .unwrap_err();
    assert_eq!(failure, RequestFailure::Duplicate);
    assert_eq!(failure.user_message(), DUPLICATE_REQUEST_MESSAGE);

    dispatcher.fail("L3", failure);
    assert_eq!(dispatcher.in_flight(), None);
    assert_eq!(dispatcher.button("L3"), RequestButton::Sent);
}

#[tokio::test]
async fn test_server_error_maps_to_generic_message_and_allows_retry() {
    let server = common::spawn_backend(MockBackend {
        request_failure: Some(StatusCode::INTERNAL_SERVER_ERROR),
        ..MockBackend::default()
    })
    .await;
    let mut dispatcher = RequestDispatcher::default();

    dispatcher.begin("L4").unwrap();
    let failure = send_consultation_request(&server.client(), "L4", "hi")
        .await
        .unwrap_err();
    assert_eq!(failure, RequestFailure::Other);
    assert_eq!(failure.user_message(), GENERIC_FAILURE_MESSAGE);

    dispatcher.fail("L4", failure);
    assert_eq!(dispatcher.button("L4"), RequestButton::Idle);
    assert!(dispatcher.begin("L4").is_ok());
}

#[tokio::test]
async fn test_unreachable_backend_is_generic_failure() {
    let api = client::HttpClient::new("http://127.0.0.1:1");
    let failure = send_consultation_request(&api, "L1", "hi")
        .await
        .unwrap_err();
    assert_eq!(failure, RequestFailure::Other);
}

#[tokio::test]
async fn test_requesting_twice_hits_backend_duplicate() {
    let server = common::spawn_backend(MockBackend::default()).await;
    let api = server.client();
    send_consultation_request(&api, "L2", "first").await.unwrap();
    let failure = send_consultation_request(&api, "L2", "second")
        .await
        .unwrap_err();
    assert_eq!(failure, RequestFailure::Duplicate);
    assert_eq!(server.sent(), vec!["L2".to_string()]);
}
