//! Blog page with client-side category filter and search.

use dioxus::prelude::*;

struct Post {
    title: &'static str,
    excerpt: &'static str,
    category: &'static str,
    author: &'static str,
    date: &'static str,
    read_time: &'static str,
}

const CATEGORIES: [&str; 5] = ["all", "seo", "marketing", "tutorial", "news"];

const POSTS: [Post; 6] = [
    Post {
        title: "10 SEO Mistakes That Are Killing Your Rankings",
        excerpt: "Discover the most common SEO mistakes and how to fix them to improve your search rankings dramatically.",
        category: "seo",
        author: "Sarah Chen",
        date: "Mar 15, 2024",
        read_time: "8 min read",
    },
    Post {
        title: "How to Use Our Extension for Competitive Analysis",
        excerpt: "A step-by-step guide on using the toolbar to analyze competitors and stay ahead in your niche.",
        category: "tutorial",
        author: "Mike Rodriguez",
        date: "Mar 12, 2024",
        read_time: "5 min read",
    },
    Post {
        title: "Reading a Backlink Profile in Five Minutes",
        excerpt: "Referring domains, anchors and velocity: the three numbers that tell you most of the story.",
        category: "seo",
        author: "Sarah Chen",
        date: "Mar 8, 2024",
        read_time: "6 min read",
    },
    Post {
        title: "Content Research Without Leaving the SERP",
        excerpt: "Turn any results page into a research session with per-result scores and traffic estimates.",
        category: "marketing",
        author: "Lena Koval",
        date: "Mar 2, 2024",
        read_time: "7 min read",
    },
    Post {
        title: "Changelog: Daily Index Refresh Is Live",
        excerpt: "Link metrics now refresh every 24 hours for all users, free tier included.",
        category: "news",
        author: "Verdant Team",
        date: "Feb 26, 2024",
        read_time: "2 min read",
    },
    Post {
        title: "Setting Up Saved Reports for Your Clients",
        excerpt: "Save any domain's snapshot to your account and share a clean report link with clients.",
        category: "tutorial",
        author: "Mike Rodriguez",
        date: "Feb 20, 2024",
        read_time: "4 min read",
    },
];

/// Blog page component.
#[component]
pub fn Blog() -> Element {
    let mut search_query = use_signal(String::new);
    let mut selected_category = use_signal(|| "all");

    let query = search_query().to_lowercase();
    let category = selected_category();
    let visible: Vec<&Post> = POSTS
        .iter()
        .filter(|post| category == "all" || post.category == category)
        .filter(|post| {
            query.is_empty()
                || post.title.to_lowercase().contains(&query)
                || post.excerpt.to_lowercase().contains(&query)
        })
        .collect();

    rsx! {
        section { class: "page-hero",
            p { class: "eyebrow", "BLOG" }
            h1 { "Guides, Tactics And Product News" }
        }

        section { class: "section",
            div { class: "blog-controls",
                input {
                    class: "blog-search",
                    r#type: "search",
                    placeholder: "Search articles...",
                    value: search_query(),
                    oninput: move |evt: FormEvent| search_query.set(evt.value()),
                }
                div { class: "category-row",
                    for cat in CATEGORIES {
                        button {
                            class: if selected_category() == cat { "chip chip-active" } else { "chip" },
                            onclick: move |_| selected_category.set(cat),
                            "{cat}"
                        }
                    }
                }
            }

            if visible.is_empty() {
                p { class: "muted empty-state", "No articles match your search." }
            } else {
                div { class: "post-grid",
                    for post in visible {
                        article { class: "card post-card",
                            p { class: "post-category", "{post.category}" }
                            h3 { "{post.title}" }
                            p { class: "muted", "{post.excerpt}" }
                            p { class: "post-meta",
                                "{post.author} · {post.date} · {post.read_time}"
                            }
                        }
                    }
                }
            }
        }
    }
}
