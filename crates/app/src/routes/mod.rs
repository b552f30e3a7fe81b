pub mod find_lawyer;
pub mod handoff;
pub mod not_found;

use crate::auth::use_auth;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdScale, LdUser};
use dioxus_free_icons::Icon;

use find_lawyer::FindLawyer;
use handoff::{Chat, LawyerRequests};
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[redirect("/", || Route::FindLawyer {})]
        #[route("/lawyers")]
        FindLawyer {},
        #[route("/lawyer/requests")]
        LawyerRequests {},
        #[route("/chat/:id")]
        Chat { id: String },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Top bar with the product name and the signed-in user.
#[component]
fn AppLayout() -> Element {
    let auth = use_auth();
    let user_label = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| if u.name.is_empty() { u.email.clone() } else { u.name.clone() })
        .unwrap_or_else(|| "Guest".to_string());

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                Link { to: Route::FindLawyer {}, class: "app-brand",
                    Icon::<LdScale> { icon: LdScale, width: 20, height: 20 }
                    span { "Lawyer Directory" }
                }
                div { class: "app-user",
                    Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                    span { "{user_label}" }
                }
            }
            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
