//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{use_api, use_session};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let api = use_api();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already signed in, go straight to the profile.
    if session.read().is_authenticated() {
        nav.replace(Route::Profile {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            match api.login(&e, &p).await {
                Ok(resp) => match (resp.token, resp.user) {
                    (Some(token), Some(user)) if resp.success => {
                        // The client stays hands-off: persisting the token
                        // and seeding the session happen here.
                        api.set_token(&token);
                        session.write().set_user(Some(user));
                        nav.push(Route::Profile {});
                    }
                    _ => {
                        loading.set(false);
                        let message = if resp.message.is_empty() {
                            "Login failed. Please try again.".to_string()
                        } else {
                            resp.message
                        };
                        error.set(Some(message));
                    }
                },
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Welcome back" }
                p { class: "auth-subtitle",
                    "Sign in to manage your Verdant account"
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    if let Some(err) = error() {
                        div { class: "form-error-banner", "{err}" }
                    }

                    div { class: "form-field",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            placeholder: "Enter your email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "password", "Password" }
                        div { class: "password-wrap",
                            input {
                                id: "password",
                                r#type: if show_password() { "text" } else { "password" },
                                placeholder: "••••••••",
                                value: password(),
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                            button {
                                r#type: "button",
                                class: "password-toggle",
                                onclick: move |_| show_password.set(!show_password()),
                                if show_password() { "Hide" } else { "Show" }
                            }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn-primary auth-submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                p { class: "auth-switch",
                    "Don't have an account? "
                    a { href: "/register", "Sign up" }
                }
            }
        }
    }
}
