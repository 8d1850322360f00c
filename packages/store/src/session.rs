//! In-memory session state: who is currently logged in for the running UI.

use std::fmt;
use std::sync::Arc;

use crate::models::User;
use crate::token::TokenStore;

/// Derived session state.
///
/// Invariant: `is_authenticated` is true iff `user` is non-null — with one
/// deliberate exception, [`SessionStore::initialize`], which trusts a stored
/// credential before any user data has been fetched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

/// Mutable session state bound to a credential store.
///
/// An owned value rather than a process-wide singleton: the app shell
/// creates one and hands it around, and every test gets an isolated
/// instance with its own [`TokenStore`].
#[derive(Clone)]
pub struct SessionStore {
    tokens: Arc<dyn TokenStore>,
    session: Session,
}

impl SessionStore {
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            tokens,
            session: Session::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    /// The credential store this session is bound to.
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Replace the cached user; `is_authenticated` tracks `user.is_some()`.
    pub fn set_user(&mut self, user: Option<User>) {
        self.session.is_authenticated = user.is_some();
        self.session.user = user;
    }

    /// Drop the credential and reset to the signed-out state.
    ///
    /// Purely local: any server-side invalidation call is the caller's
    /// concern and is best-effort.
    pub fn logout(&mut self) {
        self.tokens.remove();
        self.session = Session::default();
    }

    /// Mark the session authenticated if a credential is already stored.
    ///
    /// Runs before any profile fetch, so this can leave the store
    /// authenticated with `user == None`. Consumers tolerate that gap until
    /// the first successful fetch populates `user`.
    pub fn initialize(&mut self) {
        if self.tokens.get().is_some() {
            self.session.is_authenticated = true;
        }
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session)
            .finish()
    }
}
