use serde::{Deserialize, Serialize};

use crate::lawyer::FirmType;

/// Tri-state preference for lawyers offering a free first consultation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreeFirst {
    #[default]
    Any,
    Yes,
    No,
}

impl FreeFirst {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "",
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "yes" => Self::Yes,
            "no" => Self::No,
            _ => Self::Any,
        }
    }
}

/// Active discover-view criteria. `None` (or `false`/`Any`) imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub query: Option<String>,
    pub city: Option<String>,
    pub specialization: Option<String>,
    pub min_experience: Option<f64>,
    pub fee_min: Option<f64>,
    pub fee_max: Option<f64>,
    pub mode: Option<String>,
    pub language: Option<String>,
    pub court: Option<String>,
    pub verified_only: bool,
    pub min_rating: Option<f64>,
    pub free_first: FreeFirst,
    pub firm_type: Option<FirmType>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Filter panel values exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterForm {
    pub query: String,
    pub city: String,
    pub specialization: String,
    pub min_exp: String,
    pub fee_min: String,
    pub fee_max: String,
    pub mode: String,
    pub language: String,
    pub court: String,
    pub verified_only: bool,
    pub min_rating: String,
    pub free_first: String,
    pub firm_type: String,
}

impl FilterForm {
    /// Parse the raw form. Blank or unparseable fields are left unset.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: non_blank(&self.query),
            city: non_blank(&self.city),
            specialization: non_blank(&self.specialization),
            min_experience: parse_number(&self.min_exp),
            fee_min: parse_number(&self.fee_min),
            fee_max: parse_number(&self.fee_max),
            mode: non_blank(&self.mode),
            language: non_blank(&self.language),
            court: non_blank(&self.court),
            verified_only: self.verified_only,
            min_rating: parse_number(&self.min_rating),
            free_first: FreeFirst::from_str_or_default(&self.free_first),
            firm_type: FirmType::from_str_opt(&self.firm_type),
        }
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
