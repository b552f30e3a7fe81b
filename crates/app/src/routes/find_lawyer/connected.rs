use dioxus::prelude::*;
use shared_types::NormalizedConnection;
use shared_ui::Button;

use crate::components::{EmptyState, InitialAvatar};
use crate::format_helpers::format_datetime_human;

/// One established connection: who, the latest message, and unread count.
///
/// Clicking reports the resolved chat id (if any) to `on_open`.
#[component]
pub fn ConnectionRow(
    connection: NormalizedConnection,
    on_open: EventHandler<Option<String>>,
) -> Element {
    let lawyer = &connection.lawyer;
    let organization = lawyer.organization.clone().unwrap_or_else(|| "Independent".to_string());
    let last_text = connection
        .connection
        .last_message_text()
        .map(str::to_string);
    let last_at = connection
        .connection
        .last_activity_at()
        .map(format_datetime_human);
    let unread = connection.connection.unread_count();
    let chat_id = connection.chat_id.clone();

    rsx! {
        div {
            class: "connection-row",
            "data-connection-id": "{connection.connection.id}",
            onclick: move |_| on_open.call(chat_id.clone()),
            div { class: "connection-row-main",
                InitialAvatar { name: lawyer.name.clone(), class: "avatar-md" }
                div { class: "connection-row-text",
                    div { class: "connection-row-title",
                        h4 { class: "connection-row-name", "{lawyer.display_name()}" }
                        span { class: "connection-row-sep", "•" }
                        span { class: "connection-row-org", "{organization}" }
                    }
                    div { class: "connection-row-preview",
                        if let Some(text) = last_text {
                            "{text}"
                        } else {
                            span { class: "muted", "No messages yet" }
                        }
                    }
                }
            }
            div { class: "connection-row-side",
                if let Some(at) = last_at {
                    div { class: "connection-row-time", "{at}" }
                }
                if unread > 0 {
                    span { class: "unread-badge", "{unread}" }
                }
            }
        }
    }
}

/// The connected tab body.
#[component]
pub fn ConnectedList(
    connections: Vec<NormalizedConnection>,
    on_open: EventHandler<Option<String>>,
    on_find_lawyers: EventHandler<()>,
) -> Element {
    if connections.is_empty() {
        return rsx! {
            EmptyState {
                title: "No Lawyers Connected",
                message: "Start by finding and connecting with legal experts",
                action: rsx! {
                    Button { onclick: move |_| on_find_lawyers.call(()), "Find Lawyers" }
                },
            }
        };
    }

    rsx! {
        div { class: "connection-list",
            for connection in connections {
                ConnectionRow {
                    key: "{connection.connection.id}",
                    connection: connection.clone(),
                    on_open,
                }
            }
        }
    }
}
