//! Contact page with info cards and a local-only form.

use dioxus::prelude::*;

/// Contact page component.
///
/// The form does not reach the network; submission flips a transient
/// confirmation state and clears the fields.
#[component]
pub fn Contact() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut submitted = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submitted.set(true);
        name.set(String::new());
        email.set(String::new());
        subject.set(String::new());
        message.set(String::new());
    };

    rsx! {
        section { class: "page-hero",
            p { class: "eyebrow", "GET IN TOUCH" }
            h1 { "We'd Love To Hear From You" }
            p { class: "muted",
                "Have questions? Our team is ready to help. Reach out to us and we'll "
                "respond as soon as possible."
            }
        }

        section { class: "section",
            div { class: "contact-grid",
                div { class: "card contact-card",
                    p { class: "info-label", "Email" }
                    p { class: "info-value", "hello@verdantseo.com" }
                }
                div { class: "card contact-card",
                    p { class: "info-label", "Phone" }
                    p { class: "info-value", "+1 (555) 010-4417" }
                }
                div { class: "card contact-card",
                    p { class: "info-label", "Location" }
                    p { class: "info-value", "Remote-first, worldwide" }
                }
            }

            div { class: "card contact-form-card",
                if submitted() {
                    div {
                        class: "banner banner-success",
                        onclick: move |_| submitted.set(false),
                        "✓ Thanks! We'll get back to you shortly."
                    }
                }

                form { class: "contact-form", onsubmit: handle_submit,
                    div { class: "form-row",
                        div { class: "form-field",
                            label { r#for: "name", "Name" }
                            input {
                                id: "name",
                                r#type: "text",
                                value: name(),
                                oninput: move |evt: FormEvent| name.set(evt.value()),
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "email", "Email" }
                            input {
                                id: "email",
                                r#type: "email",
                                value: email(),
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "subject", "Subject" }
                        input {
                            id: "subject",
                            r#type: "text",
                            value: subject(),
                            oninput: move |evt: FormEvent| subject.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "message", "Message" }
                        textarea {
                            id: "message",
                            rows: 6,
                            value: message(),
                            oninput: move |evt: FormEvent| message.set(evt.value()),
                        }
                    }
                    button { r#type: "submit", class: "btn-primary", "Send Message" }
                }
            }
        }
    }
}
