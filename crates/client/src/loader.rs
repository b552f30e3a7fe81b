//! Initial page load: roster, then connections, then outgoing requests.

use std::collections::HashSet;

use shared_types::{LawyerProfile, NormalizedConnection};
use tracing::{error, info, warn};

use crate::api::LawyerApi;
use crate::normalize::{normalize_connections, sent_request_ids};

/// Snapshot the page works from for the rest of the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    pub roster: Vec<LawyerProfile>,
    pub connections: Vec<NormalizedConnection>,
    /// Lawyer ids the user already has a request out to.
    pub sent: HashSet<String>,
}

impl Directory {
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty() && self.connections.is_empty()
    }
}

/// Fetch and merge everything the directory needs.
///
/// Calls are sequential because normalization needs the roster. Failures are
/// logged and degrade to empty data: a roster failure leaves the whole
/// directory empty, a connections failure keeps the roster.
pub async fn load_directory<A>(api: &A) -> Directory
where
    A: LawyerApi + ?Sized,
{
    let roster = match api.list_lawyers().await {
        Ok(roster) => roster,
        Err(e) => {
            error!(error = %e, "failed to load lawyer roster");
            return Directory::default();
        }
    };

    let connections = match api.my_connections().await {
        Ok(records) => normalize_connections(records, &roster),
        Err(e) => {
            error!(error = %e, "failed to load connections");
            Vec::new()
        }
    };

    let sent = load_sent_requests(api).await;

    info!(
        lawyers = roster.len(),
        connections = connections.len(),
        sent = sent.len(),
        "directory loaded"
    );
    Directory {
        roster,
        connections,
        sent,
    }
}

/// Lawyer ids with an outstanding request; empty if the call fails.
pub async fn load_sent_requests<A>(api: &A) -> HashSet<String>
where
    A: LawyerApi + ?Sized,
{
    match api.my_requests().await {
        Ok(requests) => sent_request_ids(&requests),
        Err(e) => {
            warn!(error = %e, "failed to load outgoing requests");
            HashSet::new()
        }
    }
}
