//! Shared credential-store constructor for all platforms.
//!
//! Returns the [`store::TokenStore`] backing for the current build:
//! - **Web** (WASM + `web` feature): the `authToken` cookie via
//!   [`store::CookieTokens`]
//! - **Native** (tests, tooling): process-local memory via
//!   [`store::MemoryTokens`]

use std::sync::Arc;

use store::TokenStore;

/// Create the platform-appropriate credential store.
pub fn make_tokens() -> Arc<dyn TokenStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::CookieTokens::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Arc::new(store::MemoryTokens::new())
    }
}
