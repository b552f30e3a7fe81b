//! Shared formatting utilities for the UI layer.
//!
//! Timestamps are ISO-8601 strings (e.g. "2026-01-20T21:35:00Z"), formatted
//! without a date-time crate.

use shared_types::format_number;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Number of avatar colour schemes in the stylesheet (`data-palette` 0..N).
pub const AVATAR_PALETTES: u32 = 6;

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO date string as "Jan 20, 2026".
///
/// Returns the input unchanged if it doesn't look like a date.
pub fn format_date_human(date_str: &str) -> String {
    let (Some(year), Some(month), Some(day)) = (
        date_str.get(..4),
        date_str.get(5..7),
        date_str.get(8..10),
    ) else {
        return date_str.to_string();
    };

    match (parse_month(month), day.parse::<u32>()) {
        (Some(m), Ok(day_num)) => format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year),
        _ => date_str.to_string(),
    }
}

/// Format an ISO datetime string as "Jan 20, 2026 9:35 PM".
///
/// Falls back to date-only if the time portion is missing.
pub fn format_datetime_human(date_str: &str) -> String {
    let date_part = format_date_human(date_str);

    let (Some(hour_str), Some(min_str)) = (date_str.get(11..13), date_str.get(14..16)) else {
        return date_part;
    };
    let hour: u32 = match hour_str.parse() {
        Ok(h) if h < 24 => h,
        _ => return date_part,
    };

    let (display_hour, ampm) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };

    format!("{} {}:{} {}", date_part, display_hour, min_str, ampm)
}

/// Single uppercase initial for an avatar, or "?" for a blank name.
pub fn avatar_initial(name: Option<&str>) -> String {
    name.and_then(|n| n.trim().chars().next())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// Stable colour scheme for a name, so the same lawyer always looks the same.
pub fn avatar_palette(name: Option<&str>) -> u32 {
    let Some(name) = name else { return 0 };
    let hash = name
        .trim()
        .to_lowercase()
        .chars()
        .fold(0u32, |acc, c| acc.wrapping_mul(31).wrapping_add(c as u32));
    hash % AVATAR_PALETTES
}

/// Consultation fee as "₹1500", or "Fee on request".
pub fn format_fee(fee: Option<f64>) -> String {
    match fee {
        Some(f) => format!("₹{}", format_number(f)),
        None => "Fee on request".to_string(),
    }
}

/// Items beyond the first `limit` collapse into a "+N more" chip.
pub fn split_overflow(items: &[String], limit: usize) -> (&[String], Option<String>) {
    if items.len() > limit {
        (&items[..limit], Some(format!("+{} more", items.len() - limit)))
    } else {
        (items, None)
    }
}
