//! Small presentational building blocks used across the directory pages.

use dioxus::prelude::*;

use crate::format_helpers::{avatar_initial, avatar_palette};

/// Initial-letter avatar with a colour derived from the name.
#[component]
pub fn InitialAvatar(name: Option<String>, #[props(default)] class: String) -> Element {
    let initial = avatar_initial(name.as_deref());
    let palette = avatar_palette(name.as_deref());
    let title = name.clone().unwrap_or_else(|| "User".to_string());

    rsx! {
        div {
            class: "avatar {class}",
            "data-palette": "{palette}",
            title: "{title}",
            span { class: "avatar-initial", "{initial}" }
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner-wrap",
            div { class: "spinner", role: "progressbar", aria_label: "Loading" }
        }
    }
}

/// Centered placeholder for an empty list, with an optional call to action.
#[component]
pub fn EmptyState(
    title: String,
    message: String,
    #[props(default)] action: Option<Element>,
) -> Element {
    rsx! {
        div { class: "empty-state",
            h3 { class: "empty-state-title", "{title}" }
            p { class: "empty-state-message", "{message}" }
            if let Some(action) = action {
                {action}
            }
        }
    }
}
