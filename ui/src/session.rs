//! Session context and hooks for the UI.
//!
//! Not authentication: the login screen only checks that both fields are
//! non-empty before storing the entered e-mail here. The session lives for
//! the duration of the UI session and nothing is persisted.

use dioxus::prelude::*;

/// Session state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// E-mail entered on the login screen, `None` while signed out.
    pub user: Option<String>,
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that owns the session state.
/// Wrap the app with this component to enable [`use_session`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(SessionState::default);
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}
