use client::load_directory;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::LawyerProfile;

use crate::common::{self, MockBackend, Reply};

#[tokio::test]
async fn test_populated_chat_object_reduces_to_id() {
    let server = common::spawn_backend(MockBackend::default()).await;
    let dir = load_directory(&server.client()).await;
    assert_eq!(dir.connections[0].chat_id.as_deref(), Some("c1"));
    assert_eq!(dir.connections[1].chat_id.as_deref(), Some("c2"));
}

#[tokio::test]
async fn test_unknown_lawyer_id_becomes_placeholder() {
    let server = common::spawn_backend(MockBackend::default()).await;
    let dir = load_directory(&server.client()).await;
    let orphan = &dir.connections[1];
    assert!(!orphan.lawyer_resolved);
    assert_eq!(orphan.lawyer, LawyerProfile::placeholder("L404"));
    assert_eq!(orphan.lawyer.display_name(), "Unknown");
}

#[tokio::test]
async fn test_bare_id_resolved_from_roster() {
    let server = common::spawn_backend(MockBackend {
        connections: Reply::ok(json!({
            "connections": [{ "_id": "k9", "to": "L2", "status": "accepted" }]
        })),
        ..MockBackend::default()
    })
    .await;
    let dir = load_directory(&server.client()).await;
    let conn = &dir.connections[0];
    assert!(conn.lawyer_resolved);
    assert_eq!(conn.lawyer.name.as_deref(), Some("Vikram Singh"));
    assert_eq!(conn.chat_id, None);
}

#[tokio::test]
async fn test_message_and_unread_aliases() {
    let server = common::spawn_backend(MockBackend {
        connections: Reply::ok(json!({
            "connections": [{
                "_id": "k3",
                "to": "L1",
                "last_message": { "content": "Documents received", "created_at": "2026-02-01T08:00:00Z" },
                "unread": 4
            }]
        })),
        ..MockBackend::default()
    })
    .await;
    let dir = load_directory(&server.client()).await;
    let record = &dir.connections[0].connection;
    assert_eq!(record.last_message_text(), Some("Documents received"));
    assert_eq!(record.last_activity_at(), Some("2026-02-01T08:00:00Z"));
    assert_eq!(record.unread_count(), 4);
}
