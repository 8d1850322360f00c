//! Wire types for the auth and profile endpoints.
//!
//! All request and response bodies are camelCase JSON. [`store::User`] is
//! shared with the session layer and re-exported from the crate root.

use serde::{Deserialize, Serialize};

use store::User;

/// Response shape shared by `/auth/login` and `/auth/register`.
///
/// `user` and `token` are only present on success; persisting the token and
/// updating the session store are the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub password: String,
}

/// Partial update for `PATCH /users/profile`; absent fields are left
/// untouched by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Envelope for the profile endpoints (`{ "user": … }`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub(crate) struct ProfileResponse {
    pub user: User,
}

/// Error payload shape. Tolerant of missing fields so a bare status code
/// still maps to something displayable.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiMessage {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_uses_camel_case() {
        let req = RegisterRequest {
            email: "a@b.com".to_string(),
            username: "a".to_string(),
            full_name: "A B".to_string(),
            password: "secret123".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"fullName\":\"A B\""));
        assert!(!json.contains("full_name"));
    }

    #[test]
    fn test_update_request_skips_absent_fields() {
        let req = UpdateProfileRequest {
            bio: Some("hello".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, "{\"bio\":\"hello\"}");
    }

    #[test]
    fn test_auth_response_tolerates_missing_user_and_token() {
        let json = r#"{"success": false, "message": "Invalid email or password"}"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.success);
        assert!(resp.user.is_none());
        assert!(resp.token.is_none());
        assert_eq!(resp.message, "Invalid email or password");
    }

    #[test]
    fn test_api_message_tolerates_empty_payload() {
        let msg: ApiMessage = serde_json::from_str("{}").unwrap();
        assert!(!msg.success);
        assert!(msg.message.is_empty());
        assert!(msg.code.is_none());
    }
}
