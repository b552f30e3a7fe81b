use client::HttpClient;
use dioxus::prelude::*;
use shared_types::AppConfig;

mod auth;
mod components;
mod format_helpers;
mod routes;
mod timing;
use auth::AuthState;
use routes::Route;

/// Backend handle and settings shared across all routes.
#[derive(Clone)]
pub struct Backend {
    pub api: HttpClient,
    pub settings: &'static AppConfig,
}

impl Backend {
    /// Build the client from config, preferring the session's own token.
    pub fn new(settings: &'static AppConfig) -> Self {
        let session_token = settings.session.as_ref().and_then(|s| s.token.clone());
        let api = match session_token {
            Some(token) => HttpClient::from_config(&settings.api).with_token(Some(token)),
            None => HttpClient::from_config(&settings.api),
        };
        Self { api, settings }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    client::config::load_config();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let settings = client::config::config();

    use_context_provider(|| AuthState::with_user(settings.session.clone()));
    use_context_provider(|| Backend::new(settings));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
