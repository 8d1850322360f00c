//! Session context and hooks for the UI.

use api::{ApiClient, ApiConfig};
use dioxus::prelude::*;
use store::SessionStore;

use crate::make_tokens;

/// Get the shared session store.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionStore> {
    use_context::<Signal<SessionStore>>()
}

/// Get the shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that wires the credential store, the API client and
/// the session state into context. Wrap the router with this component.
///
/// The session is initialized from the persisted credential on creation, so
/// a returning visitor starts authenticated (with no user object yet — the
/// first profile fetch fills that in).
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let tokens = use_hook(make_tokens);

    let client = use_hook(|| ApiClient::new(ApiConfig::default(), tokens.clone()));
    use_context_provider(move || client);

    let session = use_hook(|| {
        let mut store = SessionStore::new(tokens.clone());
        store.initialize();
        Signal::new(store)
    });
    use_context_provider(move || session);

    rsx! {
        {children}
    }
}

/// Shell-side reaction to [`api::ApiError::Unauthorized`]: clear the session
/// and hard-navigate to the login page. The API client has already dropped
/// the credential by the time this runs, so after the navigation the app
/// boots signed out.
pub fn expire_session(session: &mut Signal<SessionStore>) {
    tracing::warn!("session expired, redirecting to login");
    session.write().set_user(None);
    navigate_to("/login");
}

/// Hard navigation that escapes the router.
///
/// Used when the session dies mid-flight: the page unmounts wholesale
/// instead of transitioning, so no stale authenticated view keeps rendering.
pub fn navigate_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("navigation requested: {path}");
    }
}
