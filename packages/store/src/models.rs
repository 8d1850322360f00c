//! # User model
//!
//! [`User`] is the client-side cache of the account record owned by the
//! backend. The wire format is camelCase JSON (`fullName`, `createdAt`,
//! `updatedAt`), matching what `/users/profile` returns. Timestamps stay as
//! strings: the client only displays them, and string fields keep the type
//! WASM-friendly.
//!
//! The UI constrains `bio` to [`MAX_BIO_LEN`] characters via
//! [`clamp_bio`]; the server owns the authoritative limit.

use serde::{Deserialize, Serialize};

/// Maximum bio length enforced by the profile form.
pub const MAX_BIO_LEN: usize = 500;

/// Account record as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub full_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    /// Display name, falling back to the username when the full name is
    /// empty.
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }

    /// Single letter shown in the avatar placeholder.
    pub fn initial(&self) -> char {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U')
    }
}

/// Cap a bio at [`MAX_BIO_LEN`] characters, respecting char boundaries.
///
/// The profile form applies this on every keystroke so no request from the
/// form path carries an over-long bio.
pub fn clamp_bio(input: &str) -> String {
    input.chars().take(MAX_BIO_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(full_name: &str, username: &str) -> User {
        User {
            id: "1".to_string(),
            email: "a@b.com".to_string(),
            username: username.to_string(),
            full_name: full_name.to_string(),
            bio: None,
            avatar: None,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        assert_eq!(user("Ada Lovelace", "ada").display_name(), "Ada Lovelace");
        assert_eq!(user("", "ada").display_name(), "ada");
    }

    #[test]
    fn test_initial_uppercases() {
        assert_eq!(user("ada lovelace", "ada").initial(), 'A');
        assert_eq!(user("", "").initial(), 'U');
    }

    #[test]
    fn test_clamp_bio_caps_at_limit() {
        let long = "x".repeat(MAX_BIO_LEN + 1);
        assert_eq!(clamp_bio(&long).chars().count(), MAX_BIO_LEN);

        let short = "hello";
        assert_eq!(clamp_bio(short), "hello");
    }

    #[test]
    fn test_clamp_bio_respects_char_boundaries() {
        let multibyte = "é".repeat(MAX_BIO_LEN + 10);
        let clamped = clamp_bio(&multibyte);
        assert_eq!(clamped.chars().count(), MAX_BIO_LEN);
    }

    #[test]
    fn test_user_wire_format_is_camel_case() {
        let json = r#"{
            "id": "1",
            "email": "a@b.com",
            "username": "a",
            "fullName": "A",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z"
        }"#;
        let parsed: User = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.full_name, "A");
        assert!(parsed.bio.is_none());
        assert!(parsed.avatar.is_none());

        let out = serde_json::to_string(&parsed).unwrap();
        assert!(out.contains("\"fullName\":\"A\""));
        assert!(out.contains("\"createdAt\""));
    }
}
