use serde::{Deserialize, Serialize};

/// Role of the signed-in user.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Helpseeker,
    Lawyer,
    Admin,
}

impl UserRole {
    /// Parse from the backend `role` field. Unknown values default to Helpseeker.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "lawyer" => UserRole::Lawyer,
            "admin" => UserRole::Admin,
            _ => UserRole::Helpseeker,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Helpseeker => "helpseeker",
            UserRole::Lawyer => "lawyer",
            UserRole::Admin => "admin",
        }
    }
}

/// The signed-in user as seen by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Bearer token attached to backend calls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl SessionUser {
    pub fn is_lawyer(&self) -> bool {
        self.role == UserRole::Lawyer
    }
}
