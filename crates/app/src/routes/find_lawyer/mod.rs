//! The lawyer directory: connected lawyers, discovery with filters, and
//! consultation requests.

mod card;
mod connected;
mod filters;

use std::collections::BTreeSet;

use client::loader::load_sent_requests;
use client::{
    landing_redirect, load_directory, send_consultation_request, visible_lawyers, Directory,
    Redirect, RequestDispatcher, RosterStats, ViewTab,
};
use dioxus::prelude::*;
use shared_types::{FilterCriteria, FilterForm, LawyerProfile, SessionUser};
use shared_ui::{use_toast, Button, ButtonVariant, ToastOptions};

use crate::auth::use_session;
use crate::components::{EmptyState, Spinner};
use crate::routes::Route;
use crate::timing::{sleep_ms, Debounce};
use crate::Backend;

use card::LawyerCard;
use connected::ConnectedList;
use filters::FilterPanel;

/// Route entry point. The session is read once and handed down explicitly.
#[component]
pub fn FindLawyer() -> Element {
    let session = use_session();
    rsx! {
        LawyerDirectory { session }
    }
}

/// Distinct roster cities for the filter suggestions, sorted.
fn roster_cities(roster: &[LawyerProfile]) -> Vec<String> {
    roster
        .iter()
        .filter_map(|l| l.city.as_deref())
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[component]
fn LawyerDirectory(session: Option<SessionUser>) -> Element {
    let backend = use_context::<Backend>();
    let toast = use_toast();
    let settings = backend.settings;
    let redirect = landing_redirect(session.as_ref());

    // One-shot: reads no signals, so it never re-runs.
    use_effect(move || {
        if let Some(Redirect::LawyerRequests) = redirect {
            tracing::info!("lawyer session, leaving the directory");
            navigator().replace(Route::LawyerRequests {});
        }
    });

    let mut tab = use_signal(ViewTab::default);
    let mut show_filters = use_signal(|| false);
    let mut form = use_signal(FilterForm::default);
    let mut criteria = use_signal(FilterCriteria::default);
    let mut debounce = use_signal(Debounce::default);
    let mut dispatcher = use_signal(RequestDispatcher::default);

    let load_api = backend.api.clone();
    let directory = use_resource(move || {
        let api = load_api.clone();
        async move {
            if redirect.is_some() {
                return Directory::default();
            }
            load_directory(&api).await
        }
    });

    // Seed the sent set once the load completes.
    use_effect(move || {
        if let Some(dir) = directory.read().as_ref() {
            dispatcher.write().merge_sent(dir.sent.iter().cloned());
        }
    });

    // Apply form edits after a quiet period; a newer edit supersedes older ones.
    let debounce_ms = settings.filters.debounce_ms;
    use_effect(move || {
        let snapshot = form.read().clone();
        let ticket = debounce.write().next_ticket();
        spawn(async move {
            sleep_ms(debounce_ms).await;
            if debounce.peek().is_current(ticket) {
                criteria.set(snapshot.criteria());
            }
        });
    });

    let request_api = backend.api.clone();
    let request_lawyer = use_callback(move |lawyer_id: String| {
        if let Err(e) = dispatcher.write().begin(&lawyer_id) {
            tracing::debug!(error = %e, "request not sent");
            return;
        }
        let api = request_api.clone();
        spawn(async move {
            match send_consultation_request(&api, &lawyer_id, &settings.requests.message).await {
                Ok(()) => {
                    dispatcher.write().succeed(&lawyer_id);
                    let refresh_api = api.clone();
                    spawn(async move {
                        let sent = load_sent_requests(&refresh_api).await;
                        dispatcher.write().merge_sent(sent);
                    });
                    sleep_ms(settings.requests.settle_delay_ms).await;
                    dispatcher.write().settle(&lawyer_id);
                }
                Err(failure) => {
                    dispatcher.write().fail(&lawyer_id, failure);
                    toast.error(failure.user_message().to_string(), ToastOptions::new());
                }
            }
        });
    });

    let open_chat = use_callback(move |chat_id: Option<String>| match chat_id {
        Some(id) => {
            navigator().push(Route::Chat { id });
        }
        None => {
            toast.info("Chat not available".to_string(), ToastOptions::new());
        }
    });

    let reset_filters = use_callback(move |()| {
        form.set(FilterForm::default());
        criteria.set(FilterCriteria::default());
    });

    if redirect.is_some() {
        return rsx! {};
    }

    let current_tab = tab();
    let tab_button = move |target: ViewTab| {
        rsx! {
            button {
                class: "tab-button",
                "data-active": current_tab == target,
                onclick: move |_| tab.set(target),
                "{target.label()}"
            }
        }
    };

    let body = match directory.read().as_ref() {
        None => rsx! { Spinner {} },
        Some(dir) => match current_tab {
            ViewTab::Connected => rsx! {
                ConnectedList {
                    connections: dir.connections.clone(),
                    on_open: open_chat,
                    on_find_lawyers: move |_| tab.set(ViewTab::Discover),
                }
            },
            ViewTab::Discover => {
                let active = criteria.read().clone();
                let visible = visible_lawyers(&dir.roster, &dir.connections, ViewTab::Discover, &active);
                let stats = RosterStats::from_lawyers(&visible);
                let lawyers: Vec<LawyerProfile> = visible.into_iter().cloned().collect();
                let state = dispatcher.read().clone();

                rsx! {
                    div { class: "discover-layout",
                        FilterPanel {
                            form,
                            stats,
                            cities: roster_cities(&dir.roster),
                            show: show_filters(),
                            on_reset: reset_filters,
                            on_close: move |_| show_filters.set(false),
                        }
                        div { class: "discover-main",
                            div { class: "filter-toggle",
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    onclick: move |_| show_filters.toggle(),
                                    if show_filters() { "Hide Filters" } else { "Show Filters" }
                                }
                            }
                            if lawyers.is_empty() {
                                EmptyState {
                                    title: "No Lawyers Found",
                                    message: "Try adjusting your filters to find more results",
                                    action: rsx! {
                                        Button {
                                            variant: ButtonVariant::Secondary,
                                            onclick: move |_| reset_filters.call(()),
                                            "Clear All Filters"
                                        }
                                    },
                                }
                            } else {
                                div { class: "lawyer-grid",
                                    for lawyer in lawyers {
                                        LawyerCard {
                                            key: "{lawyer.id}",
                                            button: state.button(&lawyer.id),
                                            lawyer: lawyer.clone(),
                                            on_request: request_lawyer,
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "directory-page",
            header { class: "directory-header",
                h1 { "Find Your Legal Expert" }
                p { "Connect with verified legal professionals tailored to your specific needs" }
            }
            nav { class: "tab-bar",
                {tab_button(ViewTab::Connected)}
                {tab_button(ViewTab::Discover)}
            }
            {body}
        }
    }
}
