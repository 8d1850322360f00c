//! Route layouts: site chrome for the public pages and the credential gate
//! for the profile group.

use dioxus::prelude::*;

use ui::{check_credential, use_session, Footer, GuardOutcome, Header, Loading};

use crate::Route;

/// Shared chrome around every public page and the profile group.
#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        Header {}
        main { class: "site-main",
            Outlet::<Route> {}
        }
        Footer {}
    }
}

/// Credential gate around the profile page group.
///
/// Runs exactly once per mount: with no stored credential it navigates to
/// the login page and keeps the loading state on screen until the page
/// unmounts; with one it renders the protected children. Token validity is
/// not checked here — the first authenticated API call's 401 path enforces
/// that.
#[component]
pub fn ProfileLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // use_hook runs once per mount, so the redirect fires exactly once.
    let outcome = use_hook(|| {
        let outcome = check_credential(session.peek().tokens());
        if outcome == GuardOutcome::RedirectToLogin {
            nav.replace(Route::Login {});
        }
        outcome
    });

    match outcome {
        GuardOutcome::RedirectToLogin => rsx! {
            Loading {}
        },
        GuardOutcome::Allow => rsx! {
            Outlet::<Route> {}
        },
    }
}
