//! About page: mission, values and team stats.

use dioxus::prelude::*;

const VALUES: [(&str, &str); 4] = [
    (
        "Accessible by default",
        "Professional-grade data shouldn't sit behind four-figure subscriptions.",
    ),
    (
        "Speed is a feature",
        "Insight you have to wait for is insight you stop using. Everything loads in-tab.",
    ),
    (
        "Honest numbers",
        "Estimates are labeled as estimates. We'd rather show a range than fake precision.",
    ),
    (
        "Privacy first",
        "Browsing history never leaves your machine; only the domain you ask about is looked up.",
    ),
];

/// About page component.
#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page-hero",
            p { class: "eyebrow", "ABOUT US" }
            h1 { "Building The Future Of SEO Research" }
            p { class: "muted",
                "We believe that everyone should have access to professional-grade SEO "
                "tools. Our mission is to democratize competitive intelligence for "
                "marketers worldwide."
            }
        }

        section { class: "section",
            div { class: "two-column",
                div {
                    h2 { "Our Mission" }
                    p { class: "muted",
                        "Most SEO research happens in a separate tab, a separate tool, a "
                        "separate budget line. We put the answers where the question comes "
                        "up: on the page you're already looking at."
                    }
                }
                div {
                    h2 { "Our Vision" }
                    p { class: "muted",
                        "A web where any marketer, founder or writer can understand why a "
                        "page ranks — and what it would take to do better — in under a "
                        "minute."
                    }
                }
            }
        }

        section { class: "section section-alt",
            h2 { class: "section-title", "What We Value" }
            div { class: "feature-grid",
                for (title, body) in VALUES {
                    div { class: "card feature-card",
                        h3 { "{title}" }
                        p { class: "muted", "{body}" }
                    }
                }
            }
        }

        section { class: "section stats-band",
            div { class: "stat",
                p { class: "stat-number", "120k+" }
                p { class: "muted", "active installs" }
            }
            div { class: "stat",
                p { class: "stat-number", "40M" }
                p { class: "muted", "domains indexed" }
            }
            div { class: "stat",
                p { class: "stat-number", "4.8★" }
                p { class: "muted", "store rating" }
            }
        }
    }
}
