//! # Cookie-backed credential store — browser-side persistence
//!
//! [`CookieTokens`] is the [`TokenStore`] implementation used on the **web
//! platform**. The credential lives in the `authToken` cookie so it survives
//! reloads and is picked up again by [`crate::SessionStore::initialize`] on
//! the next visit.
//!
//! ## Cookie attributes
//!
//! | Attribute | Value | Meaning |
//! |-----------|-------|---------|
//! | `Max-Age` | [`TOKEN_MAX_AGE_SECS`] (7 days) | credential expiry |
//! | `Path` | `/` | visible to the whole site |
//! | `Secure` | set | transport restricted to HTTPS |
//! | `SameSite` | `Strict` | strictest cross-site send policy |
//!
//! Removal rewrites the cookie with `Max-Age=0`.
//!
//! ## Error handling
//!
//! All methods silently swallow `document.cookie` failures (returning `None`
//! for reads, doing nothing for writes). A blocked or unavailable cookie jar
//! degrades to "not signed in" rather than crashing the UI; the server
//! remains the authority on whether a credential is valid.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::token::{TokenStore, TOKEN_COOKIE, TOKEN_MAX_AGE_SECS};

/// Cookie-backed TokenStore for the web platform.
///
/// A zero-size struct: every operation goes through `document.cookie`
/// directly, so there is no connection or handle to keep alive.
#[derive(Clone, Debug, Default)]
pub struct CookieTokens;

impl CookieTokens {
    pub fn new() -> Self {
        Self
    }

    fn document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }
}

impl TokenStore for CookieTokens {
    fn get(&self) -> Option<String> {
        let doc = Self::document()?;
        let cookies = doc.cookie().ok()?;

        for pair in cookies.split(';') {
            let pair = pair.trim();
            let Some(value) = pair
                .strip_prefix(TOKEN_COOKIE)
                .and_then(|rest| rest.strip_prefix('='))
            else {
                continue;
            };
            if value.is_empty() {
                return None;
            }
            let decoded: String = js_sys::decode_uri_component(value).ok()?.into();
            return Some(decoded);
        }
        None
    }

    fn set(&self, token: &str) {
        let Some(doc) = Self::document() else {
            return;
        };
        let encoded: String = js_sys::encode_uri_component(token).into();
        let cookie = format!(
            "{TOKEN_COOKIE}={encoded}; Max-Age={TOKEN_MAX_AGE_SECS}; Path=/; Secure; SameSite=Strict"
        );
        let _ = doc.set_cookie(&cookie);
    }

    fn remove(&self) {
        let Some(doc) = Self::document() else {
            return;
        };
        let cookie = format!("{TOKEN_COOKIE}=; Max-Age=0; Path=/; Secure; SameSite=Strict");
        let _ = doc.set_cookie(&cookie);
    }
}
