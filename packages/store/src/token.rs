//! Durable storage of the bearer credential.
//!
//! The credential is a single opaque token string that outlives the running
//! page. On the web it lives in the `authToken` cookie; native builds and
//! tests use an in-memory stand-in. Exactly one credential is stored at a
//! time: `set` overwrites, `remove` is unconditional.

/// Name of the cookie holding the bearer credential.
pub const TOKEN_COOKIE: &str = "authToken";

/// Credential lifetime in seconds (7 days).
pub const TOKEN_MAX_AGE_SECS: u32 = 7 * 24 * 60 * 60;

/// Backend-agnostic credential storage.
///
/// Cookie access in the browser is synchronous, so the trait is too. The
/// trait is object-safe: the session store and API client both hold an
/// `Arc<dyn TokenStore>` injected at construction time.
pub trait TokenStore: Send + Sync {
    /// The stored credential, if any.
    fn get(&self) -> Option<String>;

    /// Store a credential, overwriting any existing one.
    fn set(&self, token: &str);

    /// Delete the credential. Idempotent: removing an absent credential is
    /// not an error and leaves the store empty.
    fn remove(&self);
}
