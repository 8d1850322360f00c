//! Client configuration.
//!
//! One knob: the API base URL. It is baked in at build time via the
//! `VERDANT_API_URL` environment variable — the deployed bundle is static,
//! so there is no runtime environment to read — and falls back to the local
//! development backend.

/// Default API entry point used when no override is baked into the build.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Configuration for [`crate::ApiClient`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every request path is joined onto. Stored without a
    /// trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("VERDANT_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        assert_eq!(
            ApiConfig::new("http://localhost:5000/api/").base_url,
            "http://localhost:5000/api"
        );
        assert_eq!(
            ApiConfig::new("http://localhost:5000/api//").base_url,
            "http://localhost:5000/api"
        );
    }

    #[test]
    fn test_default_points_at_local_backend() {
        // No override is set in the test build.
        let config = ApiConfig::default();
        assert!(config.base_url.starts_with("http"));
        assert!(!config.base_url.ends_with('/'));
    }
}
