//! In-process mock of the lawyer backend.
//!
//! Each test starts its own server on an ephemeral port, so tests run in
//! parallel without sharing state.

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use client::HttpClient;
use serde_json::{json, Value};

pub const TEST_TOKEN: &str = "test-token";

/// Canned response for a GET endpoint.
#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Value,
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn error(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }),
        }
    }
}

/// A request as the mock saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: &'static str,
    pub path: &'static str,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

/// Mock configuration. `sent` seeds the outgoing request list; posting a
/// request for an id already in it answers 400, like the real backend.
#[derive(Clone)]
pub struct MockBackend {
    pub lawyers: Reply,
    pub connections: Reply,
    pub my_requests_failure: Option<StatusCode>,
    pub request_failure: Option<StatusCode>,
    pub sent: Vec<String>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            lawyers: Reply::ok(json!({ "lawyers": sample_lawyers() })),
            connections: Reply::ok(json!({ "connections": sample_connections() })),
            my_requests_failure: None,
            request_failure: None,
            sent: Vec::new(),
        }
    }
}

struct MockState {
    config: MockBackend,
    sent: Mutex<Vec<String>>,
    log: Mutex<Vec<Recorded>>,
}

impl MockState {
    fn record(
        &self,
        method: &'static str,
        path: &'static str,
        headers: &HeaderMap,
        body: Option<Value>,
    ) {
        let authorization = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.log.lock().unwrap().push(Recorded {
            method,
            path,
            authorization,
            body,
        });
    }
}

/// A running mock server.
pub struct MockServer {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockServer {
    /// Client pointed at this server, carrying [`TEST_TOKEN`].
    pub fn client(&self) -> HttpClient {
        HttpClient::new(self.base_url.clone()).with_token(Some(TEST_TOKEN.to_string()))
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.log.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<&'static str> {
        self.requests().iter().map(|r| r.path).collect()
    }

    pub fn sent(&self) -> Vec<String> {
        self.state.sent.lock().unwrap().clone()
    }
}

async fn list_lawyers(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.record("GET", "/api/lawyers/list", &headers, None);
    let reply = state.config.lawyers.clone();
    (reply.status, Json(reply.body))
}

async fn my_connections(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.record("GET", "/api/lawyers/connections/me", &headers, None);
    let reply = state.config.connections.clone();
    (reply.status, Json(reply.body))
}

async fn my_requests(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.record("GET", "/api/lawyers/my-requests", &headers, None);
    if let Some(status) = state.config.my_requests_failure {
        return (status, Json(json!({ "error": "unavailable" })));
    }
    let requests: Vec<Value> = state
        .sent
        .lock()
        .unwrap()
        .iter()
        .enumerate()
        .map(|(i, id)| json!({ "_id": format!("r{i}"), "to": id, "status": "requested" }))
        .collect();
    (StatusCode::OK, Json(json!({ "requests": requests })))
}

async fn request_consultation(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.record("POST", "/api/lawyers/request", &headers, Some(body.clone()));
    if let Some(status) = state.config.request_failure {
        return (status, Json(json!({ "error": "server error" })));
    }
    let to = body["to"].as_str().unwrap_or_default().to_string();
    let mut sent = state.sent.lock().unwrap();
    if sent.contains(&to) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Request already exists" })),
        );
    }
    sent.push(to);
    (StatusCode::OK, Json(json!({ "success": true })))
}

/// Start `config` on 127.0.0.1 with an OS-assigned port.
pub async fn spawn_backend(config: MockBackend) -> MockServer {
    let state = Arc::new(MockState {
        sent: Mutex::new(config.sent.clone()),
        config,
        log: Mutex::new(Vec::new()),
    });

    let router = Router::new()
        .route("/api/lawyers/list", get(list_lawyers))
        .route("/api/lawyers/connections/me", get(my_connections))
        .route("/api/lawyers/my-requests", get(my_requests))
        .route("/api/lawyers/request", post(request_consultation))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Mock backend crashed");
    });

    MockServer {
        base_url: format!("http://{addr}"),
        state,
    }
}

/// Four lawyers in roster order; L1 is the one the sample user is connected to.
pub fn sample_lawyers() -> Value {
    json!([
        {
            "_id": "L1",
            "name": "Asha Rao",
            "organization": "Rao & Associates",
            "city": "Mumbai",
            "verified": true,
            "online": true,
            "fee": 1500,
            "yearsExperience": 12,
            "successRate": 91,
            "specialties": ["Family", "Divorce"],
            "languages": ["English", "Marathi"],
            "modes": ["video", "in-person"],
            "rating": 4.8,
            "firmType": "firm"
        },
        {
            "_id": "L2",
            "name": "Vikram Singh",
            "city": "Delhi",
            "verified": true,
            "fee": 800,
            "yearsExperience": 5,
            "specialties": ["Criminal"],
            "languages": ["Hindi", "English"],
            "courts": ["Delhi High Court"],
            "modes": ["phone"],
            "rating": 4.2,
            "freeFirst": true,
            "firmType": "independent"
        },
        {
            "_id": "L3",
            "name": "Meera Iyer",
            "location": "Chennai",
            "fee": 0,
            "yearsExperience": 8,
            "specialties": ["Tax", "Corporate"],
            "languages": ["Tamil", "English"],
            "modes": ["chat", "video"],
            "rating": 3.9
        },
        {
            "_id": "L4",
            "name": "Kabir Khan",
            "city": "Mumbai",
            "verified": false,
            "specialties": ["Property"],
            "bio": "Land disputes and tenancy matters."
        }
    ])
}

/// One connection to L1 with a populated chat, one whose lawyer is a bare
/// id missing from the roster.
pub fn sample_connections() -> Value {
    json!([
        {
            "_id": "k1",
            "to": { "_id": "L1", "name": "Asha Rao" },
            "chat": { "_id": "c1", "title": "Consultation" },
            "status": "accepted",
            "lastMessage": { "text": "See you Monday", "createdAt": "2026-01-20T21:35:00Z" },
            "unreadCount": 2
        },
        {
            "_id": "k2",
            "to": "L404",
            "chat": "c2",
            "status": "accepted"
        }
    ])
}
