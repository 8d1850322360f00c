//! Site chrome: sticky header with navigation and the account menu.

use dioxus::prelude::*;

use crate::{navigate_to, use_api, use_session};

const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("About", "/about"),
    ("Blog", "/blog"),
    ("Contact Us", "/contact"),
];

/// Sticky site header.
///
/// The right side is auth-aware: sign-in/get-started links for anonymous
/// visitors, an avatar dropdown (profile, sign out) once a session exists.
/// A session may be authenticated without a user object right after a
/// reload; the dropdown then shows the placeholder initial until the
/// profile fetch lands.
#[component]
pub fn Header() -> Element {
    let mut session = use_session();
    let api = use_api();
    let mut menu_open = use_signal(|| false);
    let mut mobile_open = use_signal(|| false);

    let (is_authenticated, initial, username) = {
        let store = session.read();
        (
            store.is_authenticated(),
            store.user().map(|u| u.initial()).unwrap_or('U'),
            store.user().map(|u| u.username.clone()),
        )
    };

    // Server-side invalidation is best-effort; local state clears regardless
    // of the call's outcome.
    let handle_logout = move |_| {
        let api = api.clone();
        async move {
            if let Err(e) = api.logout().await {
                tracing::warn!("logout request failed: {e}");
            }
            session.write().logout();
            menu_open.set(false);
            navigate_to("/");
        }
    };

    rsx! {
        header { class: "site-header",
            nav { class: "site-nav",
                a { class: "logo", href: "/",
                    "Verdant"
                    span { class: "logo-accent", "SEO" }
                }

                div {
                    class: if mobile_open() { "nav-links open" } else { "nav-links" },
                    for (name, href) in NAV_LINKS {
                        a { class: "nav-link", href: href, "{name}" }
                    }
                }

                div { class: "nav-actions",
                    if is_authenticated {
                        div { class: "account-menu",
                            button {
                                class: "avatar-button",
                                onclick: move |_| menu_open.set(!menu_open()),
                                "{initial}"
                            }
                            if menu_open() {
                                div { class: "account-dropdown",
                                    if let Some(name) = username {
                                        p { class: "account-name", "@{name}" }
                                    }
                                    a { class: "dropdown-link", href: "/profile", "My Profile" }
                                    button {
                                        class: "dropdown-link",
                                        onclick: handle_logout,
                                        "Sign out"
                                    }
                                }
                            }
                        }
                    } else {
                        a { class: "nav-link", href: "/login", "Sign in" }
                        a { class: "btn-primary nav-cta", href: "/register", "Get Started" }
                    }

                    button {
                        class: "mobile-toggle",
                        onclick: move |_| mobile_open.set(!mobile_open()),
                        if mobile_open() { "✕" } else { "☰" }
                    }
                }
            }
        }
    }
}
