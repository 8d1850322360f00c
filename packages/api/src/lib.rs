//! # API crate — REST client for the Verdant account backend
//!
//! Every server call the web frontend makes goes through [`ApiClient`], a
//! thin wrapper over one [`reqwest::Client`] configured with the base URL
//! from [`ApiConfig`] and a JSON content type.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`](ApiClient) | the gateway client: auth header lifecycle, CRUD surface |
//! | [`config`] | base URL selection (one build-time environment knob) |
//! | [`error`](ApiError) | typed failures: `Unauthorized`, server message, transport |
//! | [`models`] | wire types for the auth and profile endpoints |
//!
//! ## Session lifecycle
//!
//! The client attaches `Authorization: Bearer <token>` whenever the injected
//! [`store::TokenStore`] holds a credential. On any HTTP 401 it discards the
//! credential and returns [`ApiError::Unauthorized`]; navigation and session
//! teardown are the application shell's job, keeping this crate free of UI
//! side effects.

mod client;
pub mod config;
mod error;
pub mod models;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{AuthResponse, LoginRequest, RegisterRequest, UpdateProfileRequest};

pub use store::User;
