use client::RosterStats;
use dioxus::prelude::*;
use shared_types::{FilterForm, FirmType, FreeFirst, CONSULTATION_MODES};

fn mode_label(mode: &str) -> &str {
    match mode {
        "in-person" => "In-person",
        "video" => "Video Call",
        "chat" => "Chat",
        "phone" => "Phone",
        other => other,
    }
}

const RATING_OPTIONS: &[(&str, &str)] = &[
    ("", "Any Rating"),
    ("3", "3+ stars"),
    ("4", "4+ stars"),
    ("4.5", "4.5+ stars"),
];

#[component]
fn FilterSection(title: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "filter-section",
            h3 { class: "filter-section-title", "{title}" }
            {children}
        }
    }
}

/// Discover-view filter sidebar. Edits go straight into `form`; the page
/// debounces them into criteria.
#[component]
pub fn FilterPanel(
    form: Signal<FilterForm>,
    stats: RosterStats,
    cities: Vec<String>,
    show: bool,
    on_reset: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let mut form = form;
    let current = form.read().clone();
    let visibility = if show { "open" } else { "collapsed" };

    rsx! {
        aside { class: "filter-panel", "data-visibility": visibility,
            div { class: "filter-panel-header",
                h2 { "Filters" }
                div { class: "filter-panel-actions",
                    button { class: "filter-close", onclick: move |_| on_close.call(()), "Close" }
                    button { class: "filter-reset", onclick: move |_| on_reset.call(()), "Reset All" }
                }
            }

            div { class: "filter-stats",
                div { class: "filter-stat",
                    span { class: "filter-stat-value", "{stats.available}" }
                    span { class: "filter-stat-label", "Available" }
                }
                div { class: "filter-stat",
                    span { class: "filter-stat-value", "{stats.average_rating_label()}" }
                    span { class: "filter-stat-label", "Avg. Rating" }
                }
            }

            FilterSection { title: "Search",
                input {
                    class: "filter-input",
                    value: "{current.query}",
                    placeholder: "Search by name, specialty...",
                    oninput: move |e| form.write().query = e.value(),
                }
            }

            FilterSection { title: "Location & Specialization",
                input {
                    class: "filter-input",
                    value: "{current.city}",
                    placeholder: "City e.g. Mumbai",
                    list: "city-list",
                    oninput: move |e| form.write().city = e.value(),
                }
                datalist { id: "city-list",
                    for city in cities {
                        option { value: "{city}" }
                    }
                }
                input {
                    class: "filter-input",
                    value: "{current.specialization}",
                    placeholder: "Specialization e.g. Criminal",
                    oninput: move |e| form.write().specialization = e.value(),
                }
            }

            FilterSection { title: "Experience",
                label { class: "filter-label", "Min Experience" }
                input {
                    class: "filter-input",
                    r#type: "number",
                    min: "0",
                    value: "{current.min_exp}",
                    placeholder: "Years",
                    oninput: move |e| form.write().min_exp = e.value(),
                }
            }

            FilterSection { title: "Fee Range",
                div { class: "filter-pair",
                    input {
                        class: "filter-input",
                        r#type: "number",
                        min: "0",
                        value: "{current.fee_min}",
                        placeholder: "Min ₹",
                        oninput: move |e| form.write().fee_min = e.value(),
                    }
                    input {
                        class: "filter-input",
                        r#type: "number",
                        min: "0",
                        value: "{current.fee_max}",
                        placeholder: "Max ₹",
                        oninput: move |e| form.write().fee_max = e.value(),
                    }
                }
            }

            FilterSection { title: "Additional Filters",
                label { class: "filter-label", "Consultation Mode" }
                select {
                    class: "filter-input",
                    value: "{current.mode}",
                    onchange: move |e| form.write().mode = e.value(),
                    option { value: "", "Any Mode" }
                    for mode in CONSULTATION_MODES.iter() {
                        option { value: "{mode}", "{mode_label(mode)}" }
                    }
                }
                label { class: "filter-label", "Language" }
                input {
                    class: "filter-input",
                    value: "{current.language}",
                    placeholder: "e.g. Hindi",
                    oninput: move |e| form.write().language = e.value(),
                }
                label { class: "filter-label", "Court" }
                input {
                    class: "filter-input",
                    value: "{current.court}",
                    placeholder: "e.g. High Court",
                    oninput: move |e| form.write().court = e.value(),
                }
                label { class: "filter-label", "Minimum Rating" }
                select {
                    class: "filter-input",
                    value: "{current.min_rating}",
                    onchange: move |e| form.write().min_rating = e.value(),
                    for (value, label) in RATING_OPTIONS.iter() {
                        option { value: "{value}", "{label}" }
                    }
                }
                label { class: "filter-label", "Free First Consultation" }
                select {
                    class: "filter-input",
                    value: "{current.free_first}",
                    onchange: move |e| form.write().free_first = e.value(),
                    option { value: FreeFirst::Any.as_str(), "Any" }
                    option { value: FreeFirst::Yes.as_str(), "Yes" }
                    option { value: FreeFirst::No.as_str(), "No" }
                }
                label { class: "filter-label", "Practice" }
                select {
                    class: "filter-input",
                    value: "{current.firm_type}",
                    onchange: move |e| form.write().firm_type = e.value(),
                    option { value: "", "Any" }
                    option { value: FirmType::Independent.as_str(), "Independent" }
                    option { value: FirmType::Firm.as_str(), "Law Firm" }
                }
                label { class: "filter-checkbox",
                    input {
                        r#type: "checkbox",
                        checked: current.verified_only,
                        onchange: move |e| form.write().verified_only = e.checked(),
                    }
                    "Verified only"
                }
            }
        }
    }
}
