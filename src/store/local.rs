//! Local snapshot store.
//!
//! Persists the whole portfolio as three JSON files (`domains.json`,
//! `providers.json`, `settings.json`) under a data directory. Every mutation
//! rewrites the affected snapshot in full; there is no partial update.
//!
//! The data directory defaults to `.domainvault` in the user's home
//! directory and can be overridden with the `DOMAINVAULT_DATA_DIR`
//! environment variable.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use uuid::Uuid;

use crate::store::{StoreBackend, UserSession};
use crate::types::domain::Domain;
use crate::types::errors::{AuthError, StoreError};
use crate::types::provider::Provider;
use crate::types::settings::{SettingsPatch, UserSettings};

use super::sample;

/// Resolves the local data directory.
///
/// `DOMAINVAULT_DATA_DIR` wins when set; otherwise `$HOME/.domainvault`,
/// falling back to the current directory when no home is known.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DOMAINVAULT_DATA_DIR") {
        return PathBuf::from(dir);
    }
    std::env::var("HOME")
        .map(|home| Path::new(&home).join(".domainvault"))
        .unwrap_or_else(|_| PathBuf::from(".domainvault"))
}

/// JSON-snapshot persistence backend for single-user, offline use.
pub struct LocalStore {
    data_dir: PathBuf,
    domains: Vec<Domain>,
    providers: Vec<Provider>,
    settings: UserSettings,
    session: Option<UserSession>,
}

impl LocalStore {
    /// Opens (or initializes) the store at the default data directory.
    pub fn open() -> Result<Self, StoreError> {
        Self::open_at(default_data_dir())
    }

    /// Opens (or initializes) the store at an explicit data directory.
    ///
    /// Missing snapshot files seed the sample portfolio. A snapshot that
    /// exists but fails to parse is treated the same way rather than
    /// failing startup.
    pub fn open_at(data_dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&data_dir)
            .map_err(|e| StoreError::Io(format!("Failed to create data directory: {}", e)))?;

        let domains = read_snapshot(&data_dir.join("domains.json"))
            .unwrap_or_else(|| sample::sample_domains(Local::now().date_naive()));
        let providers = read_snapshot(&data_dir.join("providers.json"))
            .unwrap_or_else(sample::default_providers);
        let settings =
            read_snapshot(&data_dir.join("settings.json")).unwrap_or_default();

        let mut store = Self {
            data_dir,
            domains,
            providers,
            settings,
            session: None,
        };
        // Materialize whatever was seeded so the next open reads it back.
        store.write_domains()?;
        store.write_providers()?;
        store.write_settings()?;
        Ok(store)
    }

    /// Returns the data directory backing this store.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn write_domains(&self) -> Result<(), StoreError> {
        write_snapshot(&self.data_dir.join("domains.json"), &self.domains)
    }

    fn write_providers(&self) -> Result<(), StoreError> {
        write_snapshot(&self.data_dir.join("providers.json"), &self.providers)
    }

    fn write_settings(&self) -> Result<(), StoreError> {
        write_snapshot(&self.data_dir.join("settings.json"), &self.settings)
    }
}

fn read_snapshot<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

fn write_snapshot<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| StoreError::Serialization(format!("Failed to serialize snapshot: {}", e)))?;
    fs::write(path, json)
        .map_err(|e| StoreError::Io(format!("Failed to write {}: {}", path.display(), e)))
}

impl StoreBackend for LocalStore {
    fn list_domains(&self) -> Result<Vec<Domain>, StoreError> {
        Ok(self.domains.clone())
    }

    fn create_domain(&mut self, mut domain: Domain) -> Result<String, StoreError> {
        if domain.id.is_empty() {
            domain.id = Uuid::new_v4().to_string();
        }
        let id = domain.id.clone();
        self.domains.push(domain);
        self.write_domains()?;
        Ok(id)
    }

    fn update_domain(&mut self, id: &str, mut domain: Domain) -> Result<(), StoreError> {
        let slot = self
            .domains
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        domain.id = id.to_string();
        *slot = domain;
        self.write_domains()
    }

    fn delete_domain(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.domains.len();
        self.domains.retain(|d| d.id != id);
        if self.domains.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.write_domains()
    }

    fn list_providers(&self) -> Result<Vec<Provider>, StoreError> {
        Ok(self.providers.clone())
    }

    fn create_provider(&mut self, mut provider: Provider) -> Result<String, StoreError> {
        if provider.id.is_empty() {
            provider.id = Uuid::new_v4().to_string();
        }
        let id = provider.id.clone();
        self.providers.push(provider);
        self.write_providers()?;
        Ok(id)
    }

    fn update_provider(&mut self, id: &str, mut provider: Provider) -> Result<(), StoreError> {
        let slot = self
            .providers
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        provider.id = id.to_string();
        *slot = provider;
        self.write_providers()
    }

    fn delete_provider(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.providers.len();
        self.providers.retain(|p| p.id != id);
        if self.providers.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.write_providers()
    }

    fn load_settings(&self) -> Result<UserSettings, StoreError> {
        Ok(self.settings.clone())
    }

    fn save_settings(&mut self, patch: SettingsPatch) -> Result<UserSettings, StoreError> {
        self.settings.merge(patch);
        self.write_settings()?;
        Ok(self.settings.clone())
    }

    /// The local store has no credential check; any sign-in admits a
    /// single local user.
    fn sign_in(&mut self, email: &str, _password: &str) -> Result<UserSession, AuthError> {
        let session = UserSession {
            user_id: "local".to_string(),
            email: email.to_string(),
        };
        self.session = Some(session.clone());
        Ok(session)
    }

    fn sign_up(&mut self, email: &str, password: &str) -> Result<UserSession, AuthError> {
        self.sign_in(email, password)
    }

    fn sign_out(&mut self) {
        self.session = None;
    }

    fn current_user(&self) -> Option<UserSession> {
        self.session.clone()
    }
}
