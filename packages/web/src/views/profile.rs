//! Profile page: load, edit, save and delete the signed-in account.

use api::{ApiError, UpdateProfileRequest};
use dioxus::prelude::*;
use store::models::{clamp_bio, MAX_BIO_LEN};
use ui::{expire_session, use_api, use_session, Loading};

use crate::Route;

/// Profile page component.
///
/// Mount sequence: credential check → `get_profile` → seed the session and
/// the editable form state. Save and delete each disable their own trigger
/// while in flight; the two are not coordinated against each other.
#[component]
pub fn Profile() -> Element {
    let mut session = use_session();
    let api = use_api();
    let nav = use_navigator();

    let mut is_editing = use_signal(|| false);
    let mut is_loading = use_signal(|| true);
    let mut is_saving = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);
    let mut show_delete_modal = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);

    let mut username = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut avatar = use_signal(String::new);

    // Load the profile on mount; requires a live session.
    let load_api = api.clone();
    let _loader = use_resource(move || {
        let api = load_api.clone();
        async move {
            if api.token().is_none() {
                nav.replace(Route::Login {});
                return;
            }
            match api.get_profile().await {
                Ok(user) => {
                    username.set(user.username.clone());
                    full_name.set(user.full_name.clone());
                    bio.set(user.bio.clone().unwrap_or_default());
                    avatar.set(user.avatar.clone().unwrap_or_default());
                    session.write().set_user(Some(user));
                }
                Err(ApiError::Unauthorized) => expire_session(&mut session),
                Err(e) => {
                    tracing::error!("profile load failed: {e}");
                    error.set(Some("Failed to load profile".to_string()));
                }
            }
            is_loading.set(false);
        }
    });

    let save_api = api.clone();
    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let api = save_api.clone();
        spawn(async move {
            error.set(None);
            success.set(None);
            is_saving.set(true);

            let payload = UpdateProfileRequest {
                username: Some(username().trim().to_string()),
                full_name: Some(full_name().trim().to_string()),
                bio: Some(bio()),
                avatar: Some(avatar().trim().to_string()),
            };
            match api.update_profile(&payload).await {
                Ok(user) => {
                    session.write().set_user(Some(user));
                    success.set(Some("Profile updated successfully!".to_string()));
                    is_editing.set(false);
                }
                Err(ApiError::Unauthorized) => expire_session(&mut session),
                // Stay in edit mode with the unsaved input intact.
                Err(e) => error.set(Some(e.to_string())),
            }
            is_saving.set(false);
        });
    };

    let delete_api = api.clone();
    let handle_delete = move |_| {
        let api = delete_api.clone();
        spawn(async move {
            error.set(None);
            is_deleting.set(true);

            match api.delete_profile().await {
                Ok(()) => {
                    api.remove_token();
                    session.write().logout();
                    nav.push(Route::Home {});
                }
                Err(ApiError::Unauthorized) => expire_session(&mut session),
                Err(e) => {
                    error.set(Some(e.to_string()));
                    show_delete_modal.set(false);
                }
            }
            is_deleting.set(false);
        });
    };

    if is_loading() {
        return rsx! {
            Loading {}
        };
    }

    let bio_len = bio().chars().count();
    let (email, member_since, initial) = {
        let store = session.read();
        (
            store.user().map(|u| u.email.clone()).unwrap_or_default(),
            store
                .user()
                .and_then(|u| u.created_at.split('T').next().map(str::to_string))
                .unwrap_or_else(|| "N/A".to_string()),
            store.user().map(|u| u.initial()).unwrap_or('U'),
        )
    };

    rsx! {
        div { class: "profile-page",
            div { class: "profile-container",

                // Header card
                div { class: "card profile-header",
                    div {
                        h1 { "My Profile" }
                        p { class: "muted", "Manage your Verdant account" }
                    }
                    if !is_editing() {
                        button {
                            class: "btn-primary",
                            onclick: move |_| is_editing.set(true),
                            "Edit Profile"
                        }
                    }
                }

                // Dismissible banners
                if let Some(err) = error() {
                    div {
                        class: "banner banner-error",
                        onclick: move |_| error.set(None),
                        "⚠ {err}"
                    }
                }
                if let Some(msg) = success() {
                    div {
                        class: "banner banner-success",
                        onclick: move |_| success.set(None),
                        "✓ {msg}"
                    }
                }

                // Main profile card
                div { class: "card",
                    div { class: "profile-hero",
                        div { class: "profile-avatar",
                            if avatar().is_empty() {
                                "{initial}"
                            } else {
                                img { src: avatar(), alt: full_name() }
                            }
                        }
                        h2 { "{full_name}" }
                        p { class: "profile-username", "@{username}" }
                        p { class: "muted", "{email}" }
                    }

                    if is_editing() {
                        form { class: "profile-form", onsubmit: handle_save,

                            div { class: "form-field",
                                label { r#for: "full-name", "Full Name" }
                                input {
                                    id: "full-name",
                                    r#type: "text",
                                    placeholder: "Enter your full name",
                                    value: full_name(),
                                    oninput: move |evt: FormEvent| full_name.set(evt.value()),
                                }
                            }

                            div { class: "form-field",
                                label { r#for: "username", "Username" }
                                input {
                                    id: "username",
                                    r#type: "text",
                                    placeholder: "Choose your username",
                                    value: username(),
                                    oninput: move |evt: FormEvent| username.set(evt.value()),
                                }
                            }

                            div { class: "form-field",
                                label { r#for: "bio", "Bio" }
                                textarea {
                                    id: "bio",
                                    rows: 4,
                                    maxlength: "{MAX_BIO_LEN}",
                                    placeholder: "Tell us about yourself... (max 500 characters)",
                                    value: bio(),
                                    // Cap on every keystroke so no request from
                                    // this form carries an over-long bio.
                                    oninput: move |evt: FormEvent| bio.set(clamp_bio(&evt.value())),
                                }
                                p { class: "field-hint", "{bio_len}/{MAX_BIO_LEN} characters" }
                            }

                            div { class: "form-field",
                                label { r#for: "avatar", "Avatar URL" }
                                input {
                                    id: "avatar",
                                    r#type: "url",
                                    placeholder: "https://example.com/avatar.jpg",
                                    value: avatar(),
                                    oninput: move |evt: FormEvent| avatar.set(evt.value()),
                                }
                            }

                            div { class: "form-actions",
                                button {
                                    r#type: "submit",
                                    class: "btn-primary",
                                    disabled: is_saving(),
                                    if is_saving() { "Saving..." } else { "Save Changes" }
                                }
                                button {
                                    r#type: "button",
                                    class: "btn-secondary",
                                    onclick: move |_| is_editing.set(false),
                                    "Cancel"
                                }
                            }
                        }
                    } else {
                        div { class: "profile-info-grid",
                            div { class: "info-tile",
                                p { class: "info-label", "Email Address" }
                                p { class: "info-value", "{email}" }
                            }
                            div { class: "info-tile",
                                p { class: "info-label", "Member Since" }
                                p { class: "info-value", "{member_since}" }
                            }
                            if !bio().is_empty() {
                                div { class: "info-tile info-bio",
                                    p { class: "info-label", "Bio" }
                                    p { class: "info-value", "{bio}" }
                                }
                            }
                        }
                    }
                }

                // Danger zone
                if !is_editing() {
                    div { class: "card danger-zone",
                        h3 { "Danger Zone" }
                        p { class: "muted",
                            "Permanently delete your account and all associated data. This action cannot be undone."
                        }
                        button {
                            class: "btn-danger",
                            onclick: move |_| show_delete_modal.set(true),
                            "Delete Account Permanently"
                        }
                    }
                }
            }

            if show_delete_modal() {
                DeleteModal {
                    is_deleting: is_deleting(),
                    on_close: move |_| show_delete_modal.set(false),
                    on_confirm: handle_delete,
                }
            }
        }
    }
}

/// Confirmation dialog for account deletion.
#[component]
fn DeleteModal(
    is_deleting: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                h3 { "Delete Account?" }
                p { class: "muted",
                    "This action cannot be undone. All your data will be permanently deleted."
                }
                div { class: "modal-actions",
                    button {
                        class: "btn-secondary",
                        disabled: is_deleting,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn-danger",
                        disabled: is_deleting,
                        onclick: move |_| on_confirm.call(()),
                        if is_deleting { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}
