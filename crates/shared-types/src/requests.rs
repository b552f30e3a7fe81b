use serde::{Deserialize, Serialize};

use crate::connection::{ConnectionRecord, OutgoingRequest};
use crate::lawyer::LawyerProfile;

/// Message sent with a consultation request unless configured otherwise.
pub const DEFAULT_REQUEST_MESSAGE: &str = "I would like to request a consultation with you.";

// Response envelopes. A missing list field decodes as an empty list through
// the container-level `#[serde(default)]`; `null`, a non-array, or an entry
// that fails to decode through `lenient::list`.

/// `GET /api/lawyers/list`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LawyerListResponse {
    #[serde(deserialize_with = "crate::lenient::list")]
    pub lawyers: Vec<LawyerProfile>,
}

/// `GET /api/lawyers/connections/me`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionListResponse {
    #[serde(deserialize_with = "crate::lenient::list")]
    pub connections: Vec<ConnectionRecord>,
}

/// `GET /api/lawyers/my-requests`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingRequestListResponse {
    #[serde(deserialize_with = "crate::lenient::list")]
    pub requests: Vec<OutgoingRequest>,
}

/// Body for `POST /api/lawyers/request`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    pub to: String,
    pub message: String,
}

impl ConsultationRequest {
    pub fn new(to: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            message: message.into(),
        }
    }
}
