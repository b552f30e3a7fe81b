use serde::{Deserialize, Serialize};

use crate::lawyer::LawyerProfile;

/// Anything addressable by a backend identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for LawyerProfile {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A reference the backend may send either populated or as a bare id.
///
/// Decoded untagged: a JSON object becomes `Resolved`, a string `Unresolved`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference<T> {
    Resolved(T),
    Unresolved(String),
}

impl<T: Identified> Reference<T> {
    pub fn id(&self) -> &str {
        match self {
            Reference::Resolved(value) => value.id(),
            Reference::Unresolved(id) => id,
        }
    }

    pub fn resolved(&self) -> Option<&T> {
        match self {
            Reference::Resolved(value) => Some(value),
            Reference::Unresolved(_) => None,
        }
    }
}

/// Populated chat summary attached to an accepted connection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSummary {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

impl Identified for ChatSummary {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Preview of the latest chat message on a connection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastMessage {
    #[serde(alias = "content", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(
        rename = "createdAt",
        alias = "created_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}

/// An accepted link between the signed-in user and a lawyer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectionRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(
        deserialize_with = "crate::lenient::reference",
        skip_serializing_if = "Option::is_none"
    )]
    pub to: Option<Reference<LawyerProfile>>,
    #[serde(
        deserialize_with = "crate::lenient::reference",
        skip_serializing_if = "Option::is_none"
    )]
    pub chat: Option<Reference<ChatSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(alias = "last_message", skip_serializing_if = "Option::is_none")]
    pub last_message: Option<LastMessage>,
    #[serde(
        alias = "unreadCount",
        deserialize_with = "crate::lenient::count",
        skip_serializing_if = "Option::is_none"
    )]
    pub unread: Option<u32>,
    #[serde(alias = "lastUpdated", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ConnectionRecord {
    /// Text of the latest message, if any.
    pub fn last_message_text(&self) -> Option<&str> {
        self.last_message
            .as_ref()
            .and_then(|m| m.text.as_deref())
            .filter(|t| !t.is_empty())
    }

    /// Timestamp of the latest activity: the last message, else the record update.
    pub fn last_activity_at(&self) -> Option<&str> {
        self.last_message
            .as_ref()
            .and_then(|m| m.created_at.as_deref())
            .or(self.updated_at.as_deref())
    }

    pub fn unread_count(&self) -> u32 {
        self.unread.unwrap_or(0)
    }
}

/// A connection after chat and lawyer references have been reconciled
/// with the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedConnection {
    pub connection: ConnectionRecord,
    pub chat_id: Option<String>,
    /// Full profile, or a placeholder carrying only the identifier.
    pub lawyer: LawyerProfile,
    pub lawyer_resolved: bool,
}

impl NormalizedConnection {
    /// Identifier of the connected lawyer, `None` when the record named none.
    pub fn lawyer_id(&self) -> Option<&str> {
        Some(self.lawyer.id.as_str()).filter(|id| !id.is_empty())
    }
}

/// A consultation request the signed-in user has sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingRequest {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Reference<LawyerProfile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
