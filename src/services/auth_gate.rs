//! Auth gate.
//!
//! Tracks whether a user has been admitted and delegates credential checks
//! to the active store backend. While signed out the application shell is
//! hidden and no portfolio data is exposed.

use crate::store::{StoreBackend, UserSession};
use crate::types::errors::AuthError;

/// Gate in front of the application shell.
pub struct AuthGate {
    session: Option<UserSession>,
}

impl AuthGate {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Signs in through the store backend; on success the shell becomes
    /// visible. Backend error messages surface unmodified.
    pub fn sign_in(
        &mut self,
        store: &mut dyn StoreBackend,
        email: &str,
        password: &str,
    ) -> Result<UserSession, AuthError> {
        let session = store.sign_in(email, password)?;
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Creates an account and admits the new user in one step.
    pub fn sign_up(
        &mut self,
        store: &mut dyn StoreBackend,
        email: &str,
        password: &str,
    ) -> Result<UserSession, AuthError> {
        let session = store.sign_up(email, password)?;
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Drops the session. The store stops its subscription, the shell
    /// returns to the sign-in screen.
    pub fn sign_out(&mut self, store: &mut dyn StoreBackend) {
        store.sign_out();
        self.session = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn current_user(&self) -> Option<&UserSession> {
        self.session.as_ref()
    }
}

impl Default for AuthGate {
    fn default() -> Self {
        Self::new()
    }
}
