//! Connected/discover partitioning and the discover-view predicate.
//!
//! Every active criterion must match. A criterion that refers to a field the
//! lawyer lacks fails, except the free-text query which searches whatever
//! text is present. Numeric bounds are inclusive.

use std::collections::HashSet;

use shared_types::{FilterCriteria, FreeFirst, LawyerProfile, NormalizedConnection};

use crate::view::ViewTab;

/// Identifiers of lawyers the user is already connected to.
pub fn connected_ids(connections: &[NormalizedConnection]) -> HashSet<String> {
    connections
        .iter()
        .filter_map(|c| c.lawyer_id())
        .map(str::to_string)
        .collect()
}

/// Lawyers to show for `view`, in roster order.
///
/// Connected lawyers appear only in the connected view; criteria apply only
/// to the discover view.
pub fn visible_lawyers<'a>(
    roster: &'a [LawyerProfile],
    connections: &[NormalizedConnection],
    view: ViewTab,
    criteria: &FilterCriteria,
) -> Vec<&'a LawyerProfile> {
    let connected = connected_ids(connections);
    roster
        .iter()
        .filter(|lawyer| {
            let is_connected = connected.contains(&lawyer.id);
            match view {
                ViewTab::Connected => is_connected,
                ViewTab::Discover => !is_connected && matches(lawyer, criteria),
            }
        })
        .collect()
}

/// Whether `lawyer` satisfies every active criterion.
pub fn matches(lawyer: &LawyerProfile, criteria: &FilterCriteria) -> bool {
    if let Some(query) = &criteria.query {
        if !contains_ci(&search_text(lawyer), query) {
            return false;
        }
    }
    if let Some(city) = &criteria.city {
        if !lawyer.city.as_deref().is_some_and(|c| contains_ci(c, city)) {
            return false;
        }
    }
    if let Some(specialization) = &criteria.specialization {
        if !any_contains_ci(&lawyer.specialties, specialization) {
            return false;
        }
    }
    if !at_least(lawyer.years_experience, criteria.min_experience) {
        return false;
    }
    if !at_least(lawyer.fee, criteria.fee_min) {
        return false;
    }
    if !at_most(lawyer.fee, criteria.fee_max) {
        return false;
    }
    if let Some(mode) = &criteria.mode {
        if !lawyer.modes.iter().any(|m| m.eq_ignore_ascii_case(mode)) {
            return false;
        }
    }
    if let Some(language) = &criteria.language {
        if !any_contains_ci(&lawyer.languages, language) {
            return false;
        }
    }
    if let Some(court) = &criteria.court {
        if !any_contains_ci(&lawyer.courts, court) {
            return false;
        }
    }
    if criteria.verified_only && !lawyer.verified {
        return false;
    }
    if !at_least(lawyer.rating, criteria.min_rating) {
        return false;
    }
    match criteria.free_first {
        FreeFirst::Yes if !lawyer.free_first => return false,
        FreeFirst::No if lawyer.free_first => return false,
        _ => {}
    }
    if let Some(firm_type) = criteria.firm_type {
        let same = lawyer
            .firm_type
            .as_deref()
            .is_some_and(|f| f.eq_ignore_ascii_case(firm_type.as_str()));
        if !same {
            return false;
        }
    }
    true
}

/// Name, specialties and biography joined for free-text search.
fn search_text(lawyer: &LawyerProfile) -> String {
    format!(
        "{} {} {}",
        lawyer.name.as_deref().unwrap_or_default(),
        lawyer.specialties.join(" "),
        lawyer.bio.as_deref().unwrap_or_default(),
    )
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn any_contains_ci(values: &[String], needle: &str) -> bool {
    values.iter().any(|v| contains_ci(v, needle))
}

fn at_least(value: Option<f64>, bound: Option<f64>) -> bool {
    match bound {
        Some(min) => value.is_some_and(|v| v >= min),
        None => true,
    }
}

fn at_most(value: Option<f64>, bound: Option<f64>) -> bool {
    match bound {
        Some(max) => value.is_some_and(|v| v <= max),
        None => true,
    }
}

/// Summary figures shown beside the filter panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RosterStats {
    pub available: usize,
    /// Mean rating with unrated lawyers counted as zero; `None` when empty.
    pub average_rating: Option<f64>,
}

impl RosterStats {
    pub fn from_lawyers(lawyers: &[&LawyerProfile]) -> Self {
        let available = lawyers.len();
        let average_rating = if available == 0 {
            None
        } else {
            let total: f64 = lawyers.iter().map(|l| l.rating.unwrap_or(0.0)).sum();
            Some(total / available as f64)
        };
        Self {
            available,
            average_rating,
        }
    }

    /// Average rating to one decimal place, or "-" when there is none.
    pub fn average_rating_label(&self) -> String {
        match self.average_rating {
            Some(avg) => format!("{:.1}", avg),
            None => "-".to_string(),
        }
    }
}
