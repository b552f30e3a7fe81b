use serde::{Deserialize, Serialize};

use crate::models::SessionUser;
use crate::requests::DEFAULT_REQUEST_MESSAGE;

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            token: None,
        }
    }
}

/// Consultation request settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RequestConfig {
    pub message: String,
    /// How long the "sending" marker lingers after a successful request.
    pub settle_delay_ms: u64,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_REQUEST_MESSAGE.to_string(),
            settle_delay_ms: 2000,
        }
    }
}

/// Filter panel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilterConfig {
    /// Quiet period after the last keystroke before filters are re-applied.
    pub debounce_ms: u64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section defaults, so a missing or partial file is valid.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub requests: RequestConfig,
    pub filters: FilterConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionUser>,
}
