//! Site chrome: footer with link columns.

use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "footer-grid",
                div { class: "footer-brand",
                    p { class: "logo",
                        "Verdant"
                        span { class: "logo-accent", "SEO" }
                    }
                    p { class: "footer-tagline",
                        "SEO insight for any page you visit, right in the browser."
                    }
                }
                div { class: "footer-column",
                    p { class: "footer-heading", "Product" }
                    a { class: "footer-link", href: "/", "Extension" }
                    a { class: "footer-link", href: "/blog", "Blog" }
                }
                div { class: "footer-column",
                    p { class: "footer-heading", "Company" }
                    a { class: "footer-link", href: "/about", "About" }
                    a { class: "footer-link", href: "/contact", "Contact" }
                }
                div { class: "footer-column",
                    p { class: "footer-heading", "Account" }
                    a { class: "footer-link", href: "/login", "Sign in" }
                    a { class: "footer-link", href: "/register", "Create account" }
                }
            }
            p { class: "footer-copyright", "© 2025 Verdant. All rights reserved." }
        }
    }
}
