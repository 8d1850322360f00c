//! Landing page for the browser extension.

use dioxus::prelude::*;

const FEATURES: [(&str, &str); 4] = [
    (
        "SEO score at a glance",
        "One click reveals the overall SEO health of any page you visit, scored out of 100.",
    ),
    (
        "Traffic estimates",
        "Monthly organic traffic estimates for any domain, without leaving the tab.",
    ),
    (
        "Backlink profile",
        "Referring domains, total backlinks and the anchors that matter most.",
    ),
    (
        "Domain authority",
        "Authority metrics for quick competitor comparisons while you browse.",
    ),
];

const FAQS: [(&str, &str); 4] = [
    (
        "Does the extension work on every website?",
        "Yes. The toolbar activates on any public page; metrics appear within a second of opening the panel.",
    ),
    (
        "Do I need an account to use it?",
        "The core metrics are free without an account. Creating one unlocks saved reports and higher rate limits.",
    ),
    (
        "Which browsers are supported?",
        "Chrome and every Chromium-based browser today. Firefox support is on the roadmap.",
    ),
    (
        "Where does the data come from?",
        "We combine our own crawl with licensed link-index data, refreshed daily.",
    ),
];

/// Home page component.
#[component]
pub fn Home() -> Element {
    let mut open_faq = use_signal(|| Option::<usize>::Some(0));

    rsx! {
        // Hero
        section { class: "hero",
            div { class: "hero-copy",
                h1 {
                    "Your SEO Swiss Army Knife, "
                    span { class: "accent", "Right In The Browser." }
                }
                p {
                    "One click reveals the SEO score, traffic, backlinks, and authority of any "
                    "website you visit. Perfect for link building, content research, and "
                    "competitive analysis."
                }
                div { class: "hero-actions",
                    a { class: "btn-primary btn-large", href: "/register", "Add to Chrome" }
                    a { class: "btn-ghost", href: "/about", "Learn more" }
                }
            }
        }

        // Features
        section { class: "section",
            h2 { class: "section-title", "Everything You Need, Nothing You Don't" }
            div { class: "feature-grid",
                for (title, body) in FEATURES {
                    div { class: "card feature-card",
                        h3 { "{title}" }
                        p { class: "muted", "{body}" }
                    }
                }
            }
        }

        // Testimonials
        section { class: "section section-alt",
            h2 { class: "section-title", "Loved By SEOs And Marketers" }
            div { class: "testimonial-grid",
                div { class: "card testimonial",
                    p { "\u{201c}I check every prospect with it before outreach. It replaced three paid tools for me.\u{201d}" }
                    p { class: "testimonial-author", "— Priya S., link building lead" }
                }
                div { class: "card testimonial",
                    p { "\u{201c}The fastest way to sanity-check a domain mid-browse. It's always one click away.\u{201d}" }
                    p { class: "testimonial-author", "— Marcus T., content strategist" }
                }
                div { class: "card testimonial",
                    p { "\u{201c}Our whole agency runs on it during audits. The authority numbers line up with the big suites.\u{201d}" }
                    p { class: "testimonial-author", "— Lena K., agency founder" }
                }
            }
        }

        // FAQ
        section { class: "section",
            h2 { class: "section-title", "Frequently Asked Questions" }
            div { class: "faq-list",
                for (i, (question, answer)) in FAQS.iter().enumerate() {
                    div { class: "faq-item",
                        button {
                            class: "faq-question",
                            onclick: move |_| {
                                let next = if open_faq() == Some(i) { None } else { Some(i) };
                                open_faq.set(next);
                            },
                            span { "{question}" }
                            span { class: "faq-marker",
                                if open_faq() == Some(i) { "−" } else { "+" }
                            }
                        }
                        if open_faq() == Some(i) {
                            p { class: "faq-answer muted", "{answer}" }
                        }
                    }
                }
            }
        }

        // Closing CTA
        section { class: "section cta-band",
            h2 { "Start Analyzing In Seconds" }
            p { "Free to install. No credit card required." }
            a { class: "btn-primary btn-large", href: "/register", "Get Started" }
        }
    }
}
