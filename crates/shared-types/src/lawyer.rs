use serde::{Deserialize, Serialize};

/// Consultation modes a lawyer may offer, as stored by the backend.
pub const CONSULTATION_MODES: &[&str] = &["in-person", "video", "chat", "phone"];

/// A lawyer profile as returned by the roster endpoint.
///
/// Only the identifier is guaranteed. Everything else defaults when the
/// backend omits it, so a placeholder built from a bare id is a valid profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LawyerProfile {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(deserialize_with = "crate::lenient::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text", skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text", skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text", skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(deserialize_with = "crate::lenient::flag")]
    pub verified: bool,
    #[serde(deserialize_with = "crate::lenient::flag")]
    pub online: bool,
    #[serde(deserialize_with = "crate::lenient::number", skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
    #[serde(deserialize_with = "crate::lenient::number", skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<f64>,
    #[serde(deserialize_with = "crate::lenient::number", skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<f64>,
    #[serde(deserialize_with = "crate::lenient::strings")]
    pub specialties: Vec<String>,
    #[serde(deserialize_with = "crate::lenient::strings")]
    pub languages: Vec<String>,
    #[serde(deserialize_with = "crate::lenient::strings")]
    pub education: Vec<String>,
    #[serde(deserialize_with = "crate::lenient::strings")]
    pub courts: Vec<String>,
    #[serde(deserialize_with = "crate::lenient::strings")]
    pub modes: Vec<String>,
    #[serde(deserialize_with = "crate::lenient::number", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(deserialize_with = "crate::lenient::flag")]
    pub free_first: bool,
    #[serde(deserialize_with = "crate::lenient::text", skip_serializing_if = "Option::is_none")]
    pub firm_type: Option<String>,
    #[serde(deserialize_with = "crate::lenient::number", skip_serializing_if = "Option::is_none")]
    pub response_time_hours: Option<f64>,
}

impl LawyerProfile {
    /// A profile carrying only an identifier, used when a reference
    /// cannot be resolved against the roster.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    pub fn organization_label(&self) -> &str {
        self.organization
            .as_deref()
            .filter(|o| !o.is_empty())
            .unwrap_or("Independent Lawyer")
    }

    /// City, falling back to the free-form location string.
    pub fn location_label(&self) -> &str {
        self.city
            .as_deref()
            .filter(|c| !c.is_empty())
            .or(self.location.as_deref().filter(|l| !l.is_empty()))
            .unwrap_or("Location not specified")
    }

    pub fn success_rate_label(&self) -> String {
        match self.success_rate {
            Some(rate) => format!("{}% success", format_number(rate)),
            None => "Success rate N/A".to_string(),
        }
    }

    pub fn experience_label(&self) -> String {
        match self.years_experience {
            Some(years) if years > 0.0 => format!("{} yrs", format_number(years)),
            _ => "Experience N/A".to_string(),
        }
    }
}

/// Render a number without a trailing `.0` for whole values.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Firm category values the backend accepts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FirmType {
    Independent,
    Firm,
}

impl FirmType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Independent => "independent",
            Self::Firm => "firm",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "independent" => Some(Self::Independent),
            "firm" => Some(Self::Firm),
            _ => None,
        }
    }
}
