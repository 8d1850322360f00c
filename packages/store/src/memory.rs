use std::sync::{Arc, Mutex};

use crate::token::TokenStore;

/// In-memory TokenStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokens {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokens {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokens {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn remove(&self) {
        *self.token.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let tokens = MemoryTokens::new();
        assert!(tokens.get().is_none());

        tokens.set("abc");
        assert_eq!(tokens.get().as_deref(), Some("abc"));
    }

    #[test]
    fn test_set_overwrites() {
        let tokens = MemoryTokens::new();
        tokens.set("first");
        tokens.set("second");
        assert_eq!(tokens.get().as_deref(), Some("second"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let tokens = MemoryTokens::new();

        // Removing with nothing stored must not panic.
        tokens.remove();
        assert!(tokens.get().is_none());

        tokens.set("abc");
        tokens.remove();
        assert!(tokens.get().is_none());

        tokens.remove();
        assert!(tokens.get().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let tokens = MemoryTokens::new();
        let other = tokens.clone();

        tokens.set("abc");
        assert_eq!(other.get().as_deref(), Some("abc"));

        other.remove();
        assert!(tokens.get().is_none());
    }
}
