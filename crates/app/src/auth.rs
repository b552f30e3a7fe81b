use dioxus::prelude::*;
use shared_types::SessionUser;

/// Global session state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<SessionUser>>,
}

impl AuthState {
    pub fn with_user(user: Option<SessionUser>) -> Self {
        Self {
            current_user: Signal::new(user),
        }
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Snapshot of the signed-in user, without subscribing to later changes.
pub fn use_session() -> Option<SessionUser> {
    let auth = use_auth();
    let user = auth.current_user.peek().clone();
    user
}
