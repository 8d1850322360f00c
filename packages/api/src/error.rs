use thiserror::Error;

/// Failures surfaced by [`ApiClient`](crate::ApiClient).
///
/// Nothing is retried: validation happens before a request is built, 401s
/// end the session, and everything else is reported once to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the credential (HTTP 401). By the time this is
    /// returned the client has already discarded the stored token; the
    /// application shell reacts by clearing the session and navigating to
    /// the login page.
    #[error("not authenticated")]
    Unauthorized,

    /// Any other HTTP error status, carrying the server-supplied message.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced an HTTP response. The display string is
    /// the generic fallback shown to users verbatim.
    #[error("An error occurred. Please try again.")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_server_message() {
        let err = ApiError::Api {
            status: 409,
            message: "An account with this email already exists".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "An account with this email already exists"
        );
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_unauthorized_is_distinguished() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert_eq!(ApiError::Unauthorized.to_string(), "not authenticated");
    }
}
