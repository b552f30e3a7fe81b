//! Best-effort reconciliation of connection records with the roster.
//!
//! References the backend left unpopulated are looked up in the roster;
//! anything still missing degrades to a placeholder instead of an error.

use std::collections::HashSet;

use shared_types::{
    ChatSummary, ConnectionRecord, Identified, LawyerProfile, NormalizedConnection,
    OutgoingRequest, Reference,
};
use tracing::debug;

/// Normalize every connection against the roster. Length and order are preserved.
pub fn normalize_connections(
    connections: Vec<ConnectionRecord>,
    roster: &[LawyerProfile],
) -> Vec<NormalizedConnection> {
    connections
        .into_iter()
        .map(|connection| normalize_connection(connection, roster))
        .collect()
}

pub fn normalize_connection(
    connection: ConnectionRecord,
    roster: &[LawyerProfile],
) -> NormalizedConnection {
    let chat_id = resolve_chat_id(connection.chat.as_ref());
    let (lawyer, lawyer_resolved) = resolve_lawyer(connection.to.as_ref(), roster);
    if !lawyer_resolved {
        debug!(
            connection = %connection.id,
            lawyer = %lawyer.id,
            "lawyer reference not in roster, using placeholder"
        );
    }
    NormalizedConnection {
        connection,
        chat_id,
        lawyer,
        lawyer_resolved,
    }
}

/// Reduce a chat reference to its identifier. Empty ids count as absent.
pub fn resolve_chat_id(chat: Option<&Reference<ChatSummary>>) -> Option<String> {
    chat.map(|c| c.id().to_string()).filter(|id| !id.is_empty())
}

/// Resolve a lawyer reference to a full profile.
///
/// Populated objects are used as-is, bare ids are looked up in the roster,
/// and misses yield [`LawyerProfile::placeholder`]. The flag reports whether
/// a full profile was found.
pub fn resolve_lawyer(
    reference: Option<&Reference<LawyerProfile>>,
    roster: &[LawyerProfile],
) -> (LawyerProfile, bool) {
    match reference {
        Some(Reference::Resolved(profile)) => (profile.clone(), true),
        Some(Reference::Unresolved(id)) => match roster.iter().find(|l| l.id == *id) {
            Some(profile) => (profile.clone(), true),
            None => (LawyerProfile::placeholder(id.clone()), false),
        },
        None => (LawyerProfile::placeholder(String::new()), false),
    }
}

/// Lawyer ids the user already has a request out to.
pub fn sent_request_ids(requests: &[OutgoingRequest]) -> HashSet<String> {
    requests
        .iter()
        .filter_map(|r| r.to.as_ref())
        .map(|to| to.id().to_string())
        .filter(|id| !id.is_empty())
        .collect()
}
