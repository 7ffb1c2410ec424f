//! Domain Vault persistence layer.
//!
//! One capability contract ([`StoreBackend`]) with two implementations:
//! a local whole-snapshot JSON store ([`local::LocalStore`]) and a remote
//! per-user document store with a live subscription feed
//! ([`remote::RemoteStore`]).

pub mod local;
pub mod remote;
pub mod sample;

use serde::{Deserialize, Serialize};

use crate::types::domain::Domain;
use crate::types::errors::{AuthError, StoreError};
use crate::types::provider::Provider;
use crate::types::settings::{SettingsPatch, UserSettings};

pub use local::LocalStore;
pub use remote::RemoteStore;

/// The signed-in user admitted by the auth gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: String,
    pub email: String,
}

/// Change notification delivered by a live subscription.
///
/// The local variant mutates synchronously and never emits these; the
/// remote variant emits one whenever the poller observes a server-side
/// change, including the echo of this client's own writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    DomainsChanged,
    ProvidersChanged,
    SettingsChanged,
}

/// Common persistence contract for both store variants.
///
/// `create_*` assigns the record id (the caller's id field is ignored) and
/// returns it: a fresh UUID locally, the server document key remotely.
/// Reads pull from the backing store on every call; in the remote variant
/// each read is a live fetch, while the subscription poller only signals
/// that a re-read is worthwhile.
pub trait StoreBackend: Send {
    fn list_domains(&self) -> Result<Vec<Domain>, StoreError>;
    fn create_domain(&mut self, domain: Domain) -> Result<String, StoreError>;
    fn update_domain(&mut self, id: &str, domain: Domain) -> Result<(), StoreError>;
    fn delete_domain(&mut self, id: &str) -> Result<(), StoreError>;

    fn list_providers(&self) -> Result<Vec<Provider>, StoreError>;
    fn create_provider(&mut self, provider: Provider) -> Result<String, StoreError>;
    fn update_provider(&mut self, id: &str, provider: Provider) -> Result<(), StoreError>;
    fn delete_provider(&mut self, id: &str) -> Result<(), StoreError>;

    /// Loads the singleton settings record for the current user.
    fn load_settings(&self) -> Result<UserSettings, StoreError>;
    /// Merges a partial update into the settings record and persists it.
    fn save_settings(&mut self, patch: SettingsPatch) -> Result<UserSettings, StoreError>;

    /// Authenticates a user. The local variant admits a single local user
    /// unconditionally; the remote variant contacts the auth endpoint and
    /// starts the per-user subscription on success.
    fn sign_in(&mut self, email: &str, password: &str) -> Result<UserSession, AuthError>;
    /// Creates an account, then behaves like [`StoreBackend::sign_in`].
    fn sign_up(&mut self, email: &str, password: &str) -> Result<UserSession, AuthError>;
    /// Drops the session and stops any subscription.
    fn sign_out(&mut self);
    fn current_user(&self) -> Option<UserSession>;

    /// Non-blocking poll of the subscription feed.
    fn poll_change(&self) -> Option<ChangeEvent> {
        None
    }

    /// Releases background resources. Called once at application shutdown.
    fn shutdown(&mut self) {}
}
