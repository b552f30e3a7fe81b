//! Landing pages for screens owned by other parts of the product.
//!
//! The directory only navigates here; lawyer request management and chat
//! live in their own features.

use dioxus::prelude::*;

use crate::routes::Route;

/// Where signed-in lawyers are sent instead of the directory.
#[component]
pub fn LawyerRequests() -> Element {
    rsx! {
        section { class: "handoff-page",
            h1 { "Consultation Requests" }
            p { "Incoming consultation requests are managed from the lawyer workspace." }
        }
    }
}

#[component]
pub fn Chat(id: String) -> Element {
    rsx! {
        section { class: "handoff-page",
            h1 { "Conversation" }
            p { class: "handoff-detail",
                "Chat "
                code { "{id}" }
            }
            Link { to: Route::FindLawyer {}, class: "handoff-back", "Back to your lawyers" }
        }
    }
}
