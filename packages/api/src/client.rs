//! The API gateway client: one HTTP client every server call goes through.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use store::{TokenStore, User};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    ApiMessage, AuthResponse, LoginRequest, ProfileResponse, RegisterRequest,
    UpdateProfileRequest,
};

/// REST client for the account backend.
///
/// Holds the shared [`reqwest::Client`], the configured base URL and the
/// injected credential store. Cloning is cheap; clones share the underlying
/// connection pool and credential store.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url,
            tokens,
        }
    }

    /// Build a request with the JSON content type and, when a credential is
    /// stored, the `Authorization: Bearer` header. Requests without a
    /// credential go out unauthenticated; rejection is the server's call.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.tokens.get() {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Common response handling for every endpoint.
    ///
    /// A 401 purges the stored credential and maps to
    /// [`ApiError::Unauthorized`]; the shell owns the navigation that
    /// follows. Other error statuses surface the server's message payload.
    async fn check(&self, req: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = req.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("credential rejected by server, clearing stored token");
            self.tokens.remove();
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let message = match response.json::<ApiMessage>().await {
                Ok(payload) if !payload.message.is_empty() => payload.message,
                _ => status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string(),
            };
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        Ok(self.check(req).await?.json::<T>().await?)
    }

    async fn send_no_content(&self, req: RequestBuilder) -> Result<(), ApiError> {
        self.check(req).await?;
        Ok(())
    }

    // ---- auth ----

    /// `POST /auth/login`. On success the caller persists the returned
    /// token and updates the session store; the client does neither.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.send(self.request(Method::POST, "/auth/login").json(&body))
            .await
    }

    /// `POST /auth/register`. Same response shape and caller contract as
    /// [`login`](Self::login); uniqueness of email/username is validated by
    /// the server.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.send(self.request(Method::POST, "/auth/register").json(payload))
            .await
    }

    /// `POST /auth/logout`. Best-effort server-side invalidation: callers
    /// clear local state regardless of this call's outcome.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_no_content(self.request(Method::POST, "/auth/logout"))
            .await
    }

    // ---- profile ----

    /// `GET /users/profile`.
    pub async fn get_profile(&self) -> Result<User, ApiError> {
        let resp: ProfileResponse = self.send(self.request(Method::GET, "/users/profile")).await?;
        Ok(resp.user)
    }

    /// `PATCH /users/profile`.
    pub async fn update_profile(&self, payload: &UpdateProfileRequest) -> Result<User, ApiError> {
        let resp: ProfileResponse = self
            .send(self.request(Method::PATCH, "/users/profile").json(payload))
            .await?;
        Ok(resp.user)
    }

    /// `DELETE /users/profile`.
    pub async fn delete_profile(&self) -> Result<(), ApiError> {
        self.send_no_content(self.request(Method::DELETE, "/users/profile"))
            .await
    }

    /// `GET /users/{id}`.
    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        let resp: ProfileResponse = self
            .send(self.request(Method::GET, &format!("/users/{id}")))
            .await?;
        Ok(resp.user)
    }

    // ---- credential passthroughs ----

    pub fn set_token(&self, token: &str) {
        self.tokens.set(token);
    }

    pub fn token(&self) -> Option<String> {
        self.tokens.get()
    }

    pub fn remove_token(&self) {
        self.tokens.remove();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::Path;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::{delete, get, patch, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use store::{MemoryTokens, SessionStore, TokenStore};

    use super::*;

    fn sample_user_json() -> Value {
        json!({
            "id": "1",
            "email": "a@b.com",
            "username": "a",
            "fullName": "A",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        })
    }

    /// Bind a loopback listener and serve the router from a background task.
    /// Returns the base URL to hand to the client under test.
    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api")
    }

    fn client_with(base_url: &str, tokens: &MemoryTokens) -> ApiClient {
        ApiClient::new(ApiConfig::new(base_url), Arc::new(tokens.clone()))
    }

    #[tokio::test]
    async fn test_login_success_persists_token_and_user_via_caller() {
        let app = Router::new().route(
            "/api/auth/login",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["email"], "a@b.com");
                assert_eq!(body["password"], "secret123");
                Json(json!({
                    "success": true,
                    "message": "ok",
                    "token": "abc",
                    "user": sample_user_json()
                }))
            }),
        );
        let base = serve(app).await;

        let tokens = MemoryTokens::new();
        let client = client_with(&base, &tokens);
        let mut session = SessionStore::new(Arc::new(tokens.clone()));

        let resp = client.login("a@b.com", "secret123").await.unwrap();
        assert!(resp.success);

        // The client does not persist anything implicitly; the caller does.
        assert!(tokens.get().is_none());
        client.set_token(resp.token.as_deref().unwrap());
        session.set_user(resp.user);

        assert_eq!(tokens.get().as_deref(), Some("abc"));
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().email, "a@b.com");
    }

    #[tokio::test]
    async fn test_bearer_header_attached_when_credential_present() {
        let seen: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
        let seen_handler = seen.clone();

        let app = Router::new().route(
            "/api/users/profile",
            get(move |headers: HeaderMap| {
                let seen = seen_handler.clone();
                async move {
                    *seen.lock().unwrap() = headers
                        .get("authorization")
                        .map(|v| v.to_str().unwrap().to_string());
                    Json(json!({ "user": sample_user_json() }))
                }
            }),
        );
        let base = serve(app).await;

        let tokens = MemoryTokens::new();
        tokens.set("abc");
        let client = client_with(&base, &tokens);

        let user = client.get_profile().await.unwrap();
        assert_eq!(user.username, "a");
        assert_eq!(seen.lock().unwrap().as_deref(), Some("Bearer abc"));
    }

    #[tokio::test]
    async fn test_request_without_credential_goes_out_unauthenticated() {
        let seen: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
        let seen_handler = seen.clone();

        let app = Router::new().route(
            "/api/auth/login",
            post(move |headers: HeaderMap| {
                let seen = seen_handler.clone();
                async move {
                    *seen.lock().unwrap() = headers
                        .get("authorization")
                        .map(|v| v.to_str().unwrap().to_string());
                    Json(json!({ "success": false, "message": "Invalid email or password" }))
                }
            }),
        );
        let base = serve(app).await;

        let tokens = MemoryTokens::new();
        let client = client_with(&base, &tokens);

        let resp = client.login("a@b.com", "wrong").await.unwrap();
        assert!(!resp.success);
        assert!(seen.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unauthorized_purges_credential_and_writes_no_user() {
        let app = Router::new().route(
            "/api/users/profile",
            get(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "success": false, "message": "Invalid token" })),
                )
            }),
        );
        let base = serve(app).await;

        let tokens = MemoryTokens::new();
        tokens.set("abc");
        let client = client_with(&base, &tokens);
        let session = SessionStore::new(Arc::new(tokens.clone()));

        let err = client.get_profile().await.unwrap_err();
        assert!(err.is_unauthorized());

        // Credential is gone immediately; no user data reached the session.
        assert!(tokens.get().is_none());
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_server_error_surfaces_server_message() {
        let app = Router::new().route(
            "/api/users/profile",
            patch(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({ "success": false, "message": "Username already taken" })),
                )
            }),
        );
        let base = serve(app).await;

        let tokens = MemoryTokens::new();
        tokens.set("abc");
        let client = client_with(&base, &tokens);

        let payload = UpdateProfileRequest {
            username: Some("taken".to_string()),
            ..Default::default()
        };
        let err = client.update_profile(&payload).await.unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "Username already taken");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        // Non-401 errors leave the credential alone.
        assert_eq!(tokens.get().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_error_without_payload_falls_back_to_status_reason() {
        let app = Router::new().route(
            "/api/users/profile",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR.into_response() }),
        );
        let base = serve(app).await;

        let tokens = MemoryTokens::new();
        tokens.set("abc");
        let client = client_with(&base, &tokens);

        let err = client.get_profile().await.unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 500);
                assert!(!message.is_empty());
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_profile_sends_camel_case_partial_body() {
        let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let seen_handler = seen.clone();

        let app = Router::new().route(
            "/api/users/profile",
            patch(move |Json(body): Json<Value>| {
                let seen = seen_handler.clone();
                async move {
                    *seen.lock().unwrap() = Some(body);
                    Json(json!({ "user": sample_user_json() }))
                }
            }),
        );
        let base = serve(app).await;

        let tokens = MemoryTokens::new();
        tokens.set("abc");
        let client = client_with(&base, &tokens);

        let payload = UpdateProfileRequest {
            full_name: Some("Ada Lovelace".to_string()),
            bio: Some("mathematician".to_string()),
            ..Default::default()
        };
        client.update_profile(&payload).await.unwrap();

        let body = seen.lock().unwrap().clone().unwrap();
        assert_eq!(body["fullName"], "Ada Lovelace");
        assert_eq!(body["bio"], "mathematician");
        assert!(body.get("username").is_none());
        assert!(body.get("avatar").is_none());
    }

    #[tokio::test]
    async fn test_delete_profile_then_local_teardown() {
        let app = Router::new().route(
            "/api/users/profile",
            delete(|| async { StatusCode::NO_CONTENT }),
        );
        let base = serve(app).await;

        let tokens = MemoryTokens::new();
        tokens.set("abc");
        let client = client_with(&base, &tokens);
        let mut session = SessionStore::new(Arc::new(tokens.clone()));
        session.initialize();

        client.delete_profile().await.unwrap();
        client.remove_token();
        session.logout();

        assert!(client.token().is_none());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_is_best_effort() {
        let app = Router::new().route(
            "/api/auth/logout",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "session backend down" })),
                )
            }),
        );
        let base = serve(app).await;

        let tokens = MemoryTokens::new();
        tokens.set("abc");
        let client = client_with(&base, &tokens);
        let mut session = SessionStore::new(Arc::new(tokens.clone()));
        session.initialize();

        // The network call fails, but local state clears unconditionally.
        assert!(client.logout().await.is_err());
        session.logout();

        assert!(tokens.get().is_none());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_get_user_by_id() {
        let app = Router::new().route(
            "/api/users/{id}",
            get(|Path(id): Path<String>| async move {
                assert_eq!(id, "1");
                Json(json!({ "user": sample_user_json() }))
            }),
        );
        let base = serve(app).await;

        let tokens = MemoryTokens::new();
        tokens.set("abc");
        let client = client_with(&base, &tokens);

        let user = client.get_user("1").await.unwrap();
        assert_eq!(user.id, "1");
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_generic_fallback() {
        // Reserve a port, then close it so the connection is refused.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let tokens = MemoryTokens::new();
        let client = client_with(&format!("http://{addr}/api"), &tokens);

        let err = client.login("a@b.com", "secret123").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.to_string(), "An error occurred. Please try again.");
    }
}
