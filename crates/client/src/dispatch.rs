//! Consultation request dispatch and the single in-flight marker.

use std::collections::HashSet;

use shared_types::ConsultationRequest;
use thiserror::Error;
use tracing::{info, warn};

use crate::api::LawyerApi;
use crate::error::ClientError;

pub const DUPLICATE_REQUEST_MESSAGE: &str = "You already have an active request to this lawyer.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to send request. Please try again.";

/// Why a request was refused before reaching the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("a request to {0} is already in flight")]
    InFlight(String),
    #[error("a request to {0} has already been sent")]
    AlreadySent(String),
    #[error("a request to {0} is still outstanding")]
    Busy(String),
}

/// How a request the backend rejected is reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFailure {
    /// HTTP 400: an active request to this lawyer already exists.
    Duplicate,
    Other,
}

impl RequestFailure {
    pub fn from_error(err: &ClientError) -> Self {
        match err.status() {
            Some(400) => RequestFailure::Duplicate,
            _ => RequestFailure::Other,
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            RequestFailure::Duplicate => DUPLICATE_REQUEST_MESSAGE,
            RequestFailure::Other => GENERIC_FAILURE_MESSAGE,
        }
    }
}

/// What a lawyer card's request button should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestButton {
    Idle,
    Sending,
    Sent,
}

impl RequestButton {
    pub fn label(&self) -> &'static str {
        match self {
            RequestButton::Idle => "Request Consultation",
            RequestButton::Sending => "Sending Request...",
            RequestButton::Sent => "Request Sent",
        }
    }

    pub fn disabled(&self) -> bool {
        !matches!(self, RequestButton::Idle)
    }
}

/// Client-side request state: at most one in-flight lawyer id, plus the ids
/// that already have a request on record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestDispatcher {
    in_flight: Option<String>,
    sent: HashSet<String>,
}

impl RequestDispatcher {
    pub fn with_sent(sent: HashSet<String>) -> Self {
        Self {
            in_flight: None,
            sent,
        }
    }

    pub fn in_flight(&self) -> Option<&str> {
        self.in_flight.as_deref()
    }

    pub fn is_in_flight(&self, lawyer_id: &str) -> bool {
        self.in_flight.as_deref() == Some(lawyer_id)
    }

    pub fn is_sent(&self, lawyer_id: &str) -> bool {
        self.sent.contains(lawyer_id)
    }

    pub fn can_request(&self, lawyer_id: &str) -> bool {
        self.in_flight.is_none() && !self.is_sent(lawyer_id)
    }

    pub fn button(&self, lawyer_id: &str) -> RequestButton {
        if self.is_in_flight(lawyer_id) {
            RequestButton::Sending
        } else if self.is_sent(lawyer_id) {
            RequestButton::Sent
        } else {
            RequestButton::Idle
        }
    }

    /// Mark `lawyer_id` as the sole in-flight request.
    ///
    /// Refused while any request is still outstanding, including one that
    /// succeeded but has not settled yet.
    pub fn begin(&mut self, lawyer_id: &str) -> Result<(), DispatchError> {
        if self.is_in_flight(lawyer_id) {
            return Err(DispatchError::InFlight(lawyer_id.to_string()));
        }
        if let Some(other) = &self.in_flight {
            return Err(DispatchError::Busy(other.clone()));
        }
        if self.is_sent(lawyer_id) {
            return Err(DispatchError::AlreadySent(lawyer_id.to_string()));
        }
        self.in_flight = Some(lawyer_id.to_string());
        Ok(())
    }

    /// Record a successful request. The marker stays until [`settle`](Self::settle).
    pub fn succeed(&mut self, lawyer_id: &str) {
        self.sent.insert(lawyer_id.to_string());
    }

    /// Clear the marker if it still names `lawyer_id`. Returns whether it did.
    pub fn settle(&mut self, lawyer_id: &str) -> bool {
        if self.is_in_flight(lawyer_id) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Clear the marker immediately after a failure. A duplicate means the
    /// backend already holds a request, so the id is recorded as sent.
    pub fn fail(&mut self, lawyer_id: &str, failure: RequestFailure) {
        self.settle(lawyer_id);
        if failure == RequestFailure::Duplicate {
            self.sent.insert(lawyer_id.to_string());
        }
    }

    /// Add ids the backend reports as already requested.
    pub fn merge_sent(&mut self, sent: impl IntoIterator<Item = String>) {
        self.sent.extend(sent);
    }
}

/// Post a consultation request and classify any failure.
pub async fn send_consultation_request<A>(
    api: &A,
    lawyer_id: &str,
    message: &str,
) -> Result<(), RequestFailure>
where
    A: LawyerApi + ?Sized,
{
    let request = ConsultationRequest::new(lawyer_id, message);
    match api.request_consultation(&request).await {
        Ok(()) => {
            info!(lawyer = lawyer_id, "consultation requested");
            Ok(())
        }
        Err(e) => {
            let failure = RequestFailure::from_error(&e);
            warn!(lawyer = lawyer_id, error = %e, ?failure, "consultation request failed");
            Err(failure)
        }
    }
}
