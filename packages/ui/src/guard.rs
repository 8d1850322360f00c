//! Credential gate for protected page groups.
//!
//! The guard is an optimistic UI gate, not a security boundary: it checks
//! only that a credential exists. Whether the credential is still valid is
//! decided by the server, and enforced through the 401 path of the first
//! authenticated API call.

use std::sync::Arc;

use dioxus::prelude::*;
use store::TokenStore;

/// Outcome of the once-per-mount credential check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Credential present: render the protected children.
    Allow,
    /// No credential: issue a navigation to the login page and keep the
    /// pending state on screen until the page unmounts.
    RedirectToLogin,
}

/// Decide whether a protected page group may render.
pub fn check_credential(tokens: &Arc<dyn TokenStore>) -> GuardOutcome {
    if tokens.get().is_some() {
        GuardOutcome::Allow
    } else {
        GuardOutcome::RedirectToLogin
    }
}

/// Transient loading state shown while a guard check or profile fetch is
/// pending.
#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading-screen",
            div { class: "loading-inner",
                div { class: "spinner" }
                p { class: "loading-text", "Loading..." }
            }
        }
    }
}
