//! Remote document store.
//!
//! Talks to a hosted document backend over HTTPS: email/password auth, one
//! domain and one provider collection per user, plus a per-user settings
//! document. A background polling task watches the collections and emits
//! [`ChangeEvent`]s so the UI can re-render when another device writes.
//!
//! The backend endpoint and API key come from `DOMAINVAULT_API_URL` and
//! `DOMAINVAULT_API_KEY`; the defaults are placeholders that must be
//! replaced with a real project's values.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use serde::Deserialize;
use tokio::runtime::Runtime;

use crate::store::{ChangeEvent, StoreBackend, UserSession};
use crate::types::domain::Domain;
use crate::types::errors::{AuthError, StoreError};
use crate::types::provider::Provider;
use crate::types::settings::{SettingsPatch, UserSettings};

/// Default backend endpoint. A placeholder; point `DOMAINVAULT_API_URL`
/// at a real deployment.
const DEFAULT_API_URL: &str = "https://api.domainvault.example/v1";

/// How often the subscription task re-fetches the collections.
const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Emits `event` when a fetched snapshot differs from the last observed
/// one. The first observation after sign-in counts as a change.
fn note_if_changed<T: PartialEq>(
    last: &mut Option<T>,
    fetched: T,
    event: ChangeEvent,
    events: &Sender<ChangeEvent>,
) {
    if last.as_ref() != Some(&fetched) {
        *last = Some(fetched);
        let _ = events.send(event);
    }
}

/// Remote backend connection settings, read from the environment.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub api_url: String,
    pub api_key: String,
}

impl RemoteConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("DOMAINVAULT_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_key: std::env::var("DOMAINVAULT_API_KEY")
                .unwrap_or_else(|_| "YOUR_API_KEY".to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    user_id: String,
    email: String,
    id_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Thin async client for the document backend's REST surface.
struct DocumentClient {
    http: reqwest::Client,
    config: RemoteConfig,
}

impl DocumentClient {
    fn new(config: RemoteConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}?key={}",
            self.config.api_url.trim_end_matches('/'),
            path,
            self.config.api_key
        )
    }

    /// Extracts the backend's error message from a non-success response.
    async fn backend_error(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("HTTP {}", status),
        }
    }

    async fn authenticate(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, AuthError> {
        let response = self
            .http
            .post(self.url(endpoint))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            // Surface the raw backend message, as the auth dialog shows it.
            return Err(AuthError::InvalidCredentials(
                Self::backend_error(response).await,
            ));
        }
        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<T, StoreError> {
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Backend(Self::backend_error(response).await));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }

    async fn create<B: serde::Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<String, StoreError> {
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Backend(Self::backend_error(response).await));
        }
        let created: CreatedResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(created.id)
    }

    async fn update<B: serde::Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<(), StoreError> {
        let response = self
            .http
            .patch(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Backend(Self::backend_error(response).await));
        }
        Ok(())
    }

    async fn delete(&self, path: &str, token: &str) -> Result<(), StoreError> {
        let response = self
            .http
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Backend(Self::backend_error(response).await));
        }
        Ok(())
    }
}

struct RemoteSession {
    session: UserSession,
    id_token: String,
}

/// Hosted-backend persistence with per-user collections and change polling.
///
/// Owns its own tokio runtime; the synchronous [`StoreBackend`] methods
/// block on the async client.
pub struct RemoteStore {
    runtime: Runtime,
    client: Arc<DocumentClient>,
    session: Option<RemoteSession>,
    events_tx: Sender<ChangeEvent>,
    events_rx: Mutex<Receiver<ChangeEvent>>,
    poll_stop: Arc<AtomicBool>,
}

impl RemoteStore {
    pub fn connect() -> Result<Self, StoreError> {
        Self::connect_with(RemoteConfig::from_env())
    }

    pub fn connect_with(config: RemoteConfig) -> Result<Self, StoreError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .map_err(|e| StoreError::Io(format!("Failed to start async runtime: {}", e)))?;
        let (events_tx, events_rx) = mpsc::channel();

        Ok(Self {
            runtime,
            client: Arc::new(DocumentClient::new(config)),
            session: None,
            events_tx,
            events_rx: Mutex::new(events_rx),
            poll_stop: Arc::new(AtomicBool::new(false)),
        })
    }

    fn token(&self) -> Result<&str, StoreError> {
        self.session
            .as_ref()
            .map(|s| s.id_token.as_str())
            .ok_or(StoreError::NotSignedIn)
    }

    fn user_id(&self) -> Result<&str, StoreError> {
        self.session
            .as_ref()
            .map(|s| s.session.user_id.as_str())
            .ok_or(StoreError::NotSignedIn)
    }

    fn domains_path(&self) -> Result<String, StoreError> {
        Ok(format!("users/{}/domains", self.user_id()?))
    }

    fn providers_path(&self) -> Result<String, StoreError> {
        Ok(format!("users/{}/providers", self.user_id()?))
    }

    fn settings_path(&self) -> Result<String, StoreError> {
        Ok(format!("users/{}/settings", self.user_id()?))
    }

    /// Spawns the polling task that watches both collections and the
    /// settings document, emitting a change event whenever a fetched
    /// snapshot differs from the last one.
    fn start_subscription(&self, user_id: String, id_token: String) {
        self.poll_stop.store(false, Ordering::SeqCst);
        let stop = Arc::clone(&self.poll_stop);
        let client = Arc::clone(&self.client);
        let events = self.events_tx.clone();

        self.runtime.spawn(async move {
            let domains_path = format!("users/{}/domains", user_id);
            let providers_path = format!("users/{}/providers", user_id);
            let settings_path = format!("users/{}/settings", user_id);
            let mut last_domains: Option<Vec<Domain>> = None;
            let mut last_providers: Option<Vec<Provider>> = None;
            let mut last_settings: Option<UserSettings> = None;

            loop {
                if stop.load(Ordering::SeqCst) {
                    break;
                }

                if let Ok(domains) = client.fetch::<Vec<Domain>>(&domains_path, &id_token).await {
                    note_if_changed(
                        &mut last_domains,
                        domains,
                        ChangeEvent::DomainsChanged,
                        &events,
                    );
                }
                if let Ok(providers) = client
                    .fetch::<Vec<Provider>>(&providers_path, &id_token)
                    .await
                {
                    note_if_changed(
                        &mut last_providers,
                        providers,
                        ChangeEvent::ProvidersChanged,
                        &events,
                    );
                }
                if let Ok(settings) = client
                    .fetch::<UserSettings>(&settings_path, &id_token)
                    .await
                {
                    note_if_changed(
                        &mut last_settings,
                        settings,
                        ChangeEvent::SettingsChanged,
                        &events,
                    );
                }

                tokio::time::sleep(POLL_INTERVAL).await;
            }
        });
    }

    fn stop_subscription(&self) {
        self.poll_stop.store(true, Ordering::SeqCst);
    }
}

impl StoreBackend for RemoteStore {
    fn list_domains(&self) -> Result<Vec<Domain>, StoreError> {
        let path = self.domains_path()?;
        let token = self.token()?;
        self.runtime.block_on(self.client.fetch(&path, token))
    }

    fn create_domain(&mut self, mut domain: Domain) -> Result<String, StoreError> {
        let path = self.domains_path()?;
        let token = self.token()?.to_string();
        // The backend assigns the document id.
        domain.id = String::new();
        self.runtime
            .block_on(self.client.create(&path, &token, &domain))
    }

    fn update_domain(&mut self, id: &str, domain: Domain) -> Result<(), StoreError> {
        let path = format!("{}/{}", self.domains_path()?, id);
        let token = self.token()?.to_string();
        self.runtime
            .block_on(self.client.update(&path, &token, &domain))
    }

    fn delete_domain(&mut self, id: &str) -> Result<(), StoreError> {
        let path = format!("{}/{}", self.domains_path()?, id);
        let token = self.token()?.to_string();
        self.runtime.block_on(self.client.delete(&path, &token))
    }

    fn list_providers(&self) -> Result<Vec<Provider>, StoreError> {
        let path = self.providers_path()?;
        let token = self.token()?;
        self.runtime.block_on(self.client.fetch(&path, token))
    }

    fn create_provider(&mut self, mut provider: Provider) -> Result<String, StoreError> {
        let path = self.providers_path()?;
        let token = self.token()?.to_string();
        provider.id = String::new();
        self.runtime
            .block_on(self.client.create(&path, &token, &provider))
    }

    fn update_provider(&mut self, id: &str, provider: Provider) -> Result<(), StoreError> {
        let path = format!("{}/{}", self.providers_path()?, id);
        let token = self.token()?.to_string();
        self.runtime
            .block_on(self.client.update(&path, &token, &provider))
    }

    fn delete_provider(&mut self, id: &str) -> Result<(), StoreError> {
        let path = format!("{}/{}", self.providers_path()?, id);
        let token = self.token()?.to_string();
        self.runtime.block_on(self.client.delete(&path, &token))
    }

    fn load_settings(&self) -> Result<UserSettings, StoreError> {
        let path = self.settings_path()?;
        let token = self.token()?;
        self.runtime.block_on(self.client.fetch(&path, token))
    }

    fn save_settings(&mut self, patch: SettingsPatch) -> Result<UserSettings, StoreError> {
        let path = self.settings_path()?;
        let token = self.token()?.to_string();
        // The settings document merges field-wise server-side; load back the
        // merged record so callers see the authoritative state.
        self.runtime
            .block_on(self.client.update(&path, &token, &patch))?;
        self.runtime.block_on(self.client.fetch(&path, &token))
    }

    fn sign_in(&mut self, email: &str, password: &str) -> Result<UserSession, AuthError> {
        let auth = self
            .runtime
            .block_on(self.client.authenticate("auth/signin", email, password))?;
        let session = UserSession {
            user_id: auth.user_id,
            email: auth.email,
        };
        self.start_subscription(session.user_id.clone(), auth.id_token.clone());
        self.session = Some(RemoteSession {
            session: session.clone(),
            id_token: auth.id_token,
        });
        Ok(session)
    }

    fn sign_up(&mut self, email: &str, password: &str) -> Result<UserSession, AuthError> {
        let auth = self
            .runtime
            .block_on(self.client.authenticate("auth/signup", email, password))?;
        let session = UserSession {
            user_id: auth.user_id,
            email: auth.email,
        };
        self.start_subscription(session.user_id.clone(), auth.id_token.clone());
        self.session = Some(RemoteSession {
            session: session.clone(),
            id_token: auth.id_token,
        });
        Ok(session)
    }

    fn sign_out(&mut self) {
        self.stop_subscription();
        self.session = None;
    }

    fn current_user(&self) -> Option<UserSession> {
        self.session.as_ref().map(|s| s.session.clone())
    }

    fn poll_change(&self) -> Option<ChangeEvent> {
        self.events_rx
            .lock()
            .ok()
            .and_then(|rx| rx.try_recv().ok())
    }

    fn shutdown(&mut self) {
        self.stop_subscription();
    }
}
