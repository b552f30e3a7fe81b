use client::RequestButton;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBadgeCheck, LdBuilding2, LdCalendar, LdCheck, LdGraduationCap, LdLanguages, LdMapPin,
};
use dioxus_free_icons::Icon;
use shared_types::LawyerProfile;
use shared_ui::{Badge, BadgeVariant};

use crate::components::InitialAvatar;
use crate::format_helpers::{format_fee, split_overflow};

const MAX_SPECIALTIES: usize = 4;
const MAX_DETAIL_ITEMS: usize = 3;

/// Labelled chip list for one profile attribute. Renders nothing when empty.
#[component]
fn DetailRow(title: &'static str, icon: Element, items: Vec<String>) -> Element {
    if items.is_empty() {
        return rsx! {};
    }
    let (shown, more) = split_overflow(&items, MAX_DETAIL_ITEMS);

    rsx! {
        div { class: "detail-row",
            div { class: "detail-row-icon", {icon} }
            div { class: "detail-row-body",
                div { class: "detail-row-title", "{title}" }
                div { class: "chip-list",
                    for item in shown.iter() {
                        span { class: "chip", "{item}" }
                    }
                    if let Some(more) = more {
                        span { class: "chip chip-more", "{more}" }
                    }
                }
            }
        }
    }
}

/// A discoverable lawyer with the consultation request button.
#[component]
pub fn LawyerCard(
    lawyer: LawyerProfile,
    button: RequestButton,
    on_request: EventHandler<String>,
) -> Element {
    let (specialties, more_specialties) = split_overflow(&lawyer.specialties, MAX_SPECIALTIES);
    let lawyer_id = lawyer.id.clone();
    let button_state = match button {
        RequestButton::Idle => "idle",
        RequestButton::Sending => "sending",
        RequestButton::Sent => "sent",
    };

    rsx! {
        article { class: "lawyer-card", "data-lawyer-id": "{lawyer.id}",
            if lawyer.verified {
                div { class: "lawyer-card-verified",
                    Badge { variant: BadgeVariant::Success,
                        Icon::<LdBadgeCheck> { icon: LdBadgeCheck, width: 12, height: 12 }
                        "Verified"
                    }
                }
            }

            div { class: "lawyer-card-head",
                div { class: "lawyer-card-avatar",
                    InitialAvatar { name: lawyer.name.clone(), class: "avatar-lg" }
                    if lawyer.online {
                        span { class: "online-dot", title: "Online" }
                    }
                }
                div { class: "lawyer-card-identity",
                    h3 { class: "lawyer-card-name", "{lawyer.display_name()}" }
                    p { class: "lawyer-card-org", "{lawyer.organization_label()}" }
                    div { class: "lawyer-card-meta",
                        span { class: "lawyer-card-location",
                            Icon::<LdMapPin> { icon: LdMapPin, width: 14, height: 14 }
                            "{lawyer.location_label()}"
                        }
                        Badge { variant: BadgeVariant::Success, "{lawyer.success_rate_label()}" }
                        Badge { variant: BadgeVariant::Secondary, "{lawyer.experience_label()}" }
                        span { class: "lawyer-card-fee", "{format_fee(lawyer.fee)}" }
                    }
                }
            }

            div { class: "lawyer-card-specialties",
                div { class: "section-label", "SPECIALTIES" }
                div { class: "chip-list",
                    for specialty in specialties.iter() {
                        span { class: "chip chip-accent", "{specialty}" }
                    }
                    if let Some(more) = more_specialties {
                        span { class: "chip chip-more", "{more}" }
                    }
                }
            }

            div { class: "lawyer-card-details",
                DetailRow {
                    title: "LANGUAGES",
                    icon: rsx! { Icon::<LdLanguages> { icon: LdLanguages, width: 16, height: 16 } },
                    items: lawyer.languages.clone(),
                }
                DetailRow {
                    title: "EDUCATION",
                    icon: rsx! { Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 16, height: 16 } },
                    items: lawyer.education.clone(),
                }
                DetailRow {
                    title: "COURTS",
                    icon: rsx! { Icon::<LdBuilding2> { icon: LdBuilding2, width: 16, height: 16 } },
                    items: lawyer.courts.clone(),
                }
                DetailRow {
                    title: "CONSULTATION MODES",
                    icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 } },
                    items: lawyer.modes.clone(),
                }
            }

            div { class: "lawyer-card-actions",
                button {
                    class: "request-button",
                    "data-state": button_state,
                    disabled: button.disabled(),
                    onclick: move |_| on_request.call(lawyer_id.clone()),
                    {match button {
                        RequestButton::Sent => rsx! {
                            Icon::<LdCheck> { icon: LdCheck, width: 18, height: 18 }
                            span { "{button.label()}" }
                        },
                        RequestButton::Sending => rsx! {
                            span { class: "spinner spinner-inline" }
                            span { "{button.label()}" }
                        },
                        RequestButton::Idle => rsx! { "{button.label()}" },
                    }}
                }
            }
        }
    }
}
