//! Registration page view with per-field validation.

use api::RegisterRequest;
use dioxus::prelude::*;
use ui::{use_api, use_session};

use crate::Route;

/// Field-level validation errors, rendered inline under each input.
#[derive(Clone, Debug, Default, PartialEq)]
struct FieldErrors {
    email: Option<String>,
    username: Option<String>,
    full_name: Option<String>,
    password: Option<String>,
    confirm_password: Option<String>,
}

impl FieldErrors {
    fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.full_name.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

/// Client-side checks that run before any network call. Uniqueness of email
/// and username stays with the server.
fn validate(
    email: &str,
    username: &str,
    full_name: &str,
    password: &str,
    confirm_password: &str,
) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if email.trim().is_empty() {
        errors.email = Some("Email is required".to_string());
    }
    if username.trim().is_empty() {
        errors.username = Some("Username is required".to_string());
    }
    if full_name.trim().is_empty() {
        errors.full_name = Some("Full name is required".to_string());
    }
    if password.is_empty() {
        errors.password = Some("Password is required".to_string());
    } else if password.len() < 8 {
        errors.password = Some("Password must be at least 8 characters".to_string());
    }
    if password != confirm_password {
        errors.confirm_password = Some("Passwords do not match".to_string());
    }

    errors
}

/// Register page component.
#[component]
pub fn Register() -> Element {
    let mut session = use_session();
    let api = use_api();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut errors = use_signal(FieldErrors::default);
    let mut server_error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already signed in, go straight to the profile.
    if session.read().is_authenticated() {
        nav.replace(Route::Profile {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            server_error.set(None);

            let checked = validate(
                &email(),
                &username(),
                &full_name(),
                &password(),
                &confirm_password(),
            );
            if !checked.is_empty() {
                errors.set(checked);
                return;
            }
            errors.set(FieldErrors::default());

            loading.set(true);
            let payload = RegisterRequest {
                email: email().trim().to_string(),
                username: username().trim().to_string(),
                full_name: full_name().trim().to_string(),
                password: password(),
            };
            match api.register(&payload).await {
                Ok(resp) => match (resp.token, resp.user) {
                    (Some(token), Some(user)) if resp.success => {
                        api.set_token(&token);
                        session.write().set_user(Some(user));
                        nav.push(Route::Profile {});
                    }
                    _ => {
                        loading.set(false);
                        let message = if resp.message.is_empty() {
                            "Registration failed. Please try again.".to_string()
                        } else {
                            resp.message
                        };
                        server_error.set(Some(message));
                    }
                },
                Err(err) => {
                    loading.set(false);
                    server_error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Create your account" }
                p { class: "auth-subtitle",
                    "Get the full picture of any site you visit"
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_register,

                    if let Some(err) = server_error() {
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
                        if let Some(err) = errors().email {
                            p { class: "field-error", "{err}" }
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "username", "Username" }
                        input {
                            id: "username",
                            r#type: "text",
                            placeholder: "Choose a username",
                            value: username(),
                            oninput: move |evt: FormEvent| username.set(evt.value()),
                        }
                        if let Some(err) = errors().username {
                            p { class: "field-error", "{err}" }
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "full-name", "Full name" }
                        input {
                            id: "full-name",
                            r#type: "text",
                            placeholder: "Enter your full name",
                            value: full_name(),
                            oninput: move |evt: FormEvent| full_name.set(evt.value()),
                        }
                        if let Some(err) = errors().full_name {
                            p { class: "field-error", "{err}" }
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "password", "Password" }
                        div { class: "password-wrap",
                            input {
                                id: "password",
                                r#type: if show_password() { "text" } else { "password" },
                                placeholder: "Min 8 characters",
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
                        if let Some(err) = errors().password {
                            p { class: "field-error", "{err}" }
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "confirm-password", "Confirm password" }
                        input {
                            id: "confirm-password",
                            r#type: "password",
                            placeholder: "Repeat your password",
                            value: confirm_password(),
                            oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                        }
                        if let Some(err) = errors().confirm_password {
                            p { class: "field-error", "{err}" }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn-primary auth-submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Create account" }
                    }
                }

                p { class: "auth-switch",
                    "Already have an account? "
                    a { href: "/login", "Sign in" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_complete_input() {
        let errors = validate("a@b.com", "ada", "Ada Lovelace", "secret123", "secret123");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validate_requires_every_field() {
        let errors = validate("", "", "", "", "");
        assert!(errors.email.is_some());
        assert!(errors.username.is_some());
        assert!(errors.full_name.is_some());
        assert!(errors.password.is_some());
    }

    #[test]
    fn test_validate_rejects_short_password() {
        let errors = validate("a@b.com", "ada", "Ada", "short", "short");
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 8 characters")
        );
        assert!(errors.confirm_password.is_none());
    }

    #[test]
    fn test_validate_rejects_mismatched_confirmation() {
        let errors = validate("a@b.com", "ada", "Ada", "secret123", "secret124");
        assert_eq!(
            errors.confirm_password.as_deref(),
            Some("Passwords do not match")
        );
    }
}
