//! App Core for Domain Vault.
//!
//! Central struct holding the store backend, managers, and engines, plus
//! the read-side composition the shells (webview, RPC, console) render
//! from.

use chrono::{Datelike, Local, NaiveDateTime};

use crate::managers::domain_manager::{DomainManager, DomainManagerTrait};
use crate::managers::form_controller::FormController;
use crate::managers::provider_manager::{ProviderManager, ProviderManagerTrait};
use crate::services::auth_gate::AuthGate;
use crate::services::localization_engine::{LocalizationEngine, LocalizationEngineTrait};
use crate::services::theme_engine::ThemeEngine;
use crate::services::{calendar_engine, ics_exporter, notification_engine, stats_engine};
use crate::store::{ChangeEvent, LocalStore, RemoteStore, StoreBackend};
use crate::types::calendar::MonthGrid;
use crate::types::domain::{Domain, DomainDraft};
use crate::types::errors::{ExportError, StoreError};
use crate::types::notification::Notification;
use crate::types::provider::{Provider, ProviderDraft};
use crate::types::stats::{DashboardStats, MonthlyExpenses, ProviderShare, UrgentRenewal};

/// Central application struct.
///
/// The store backend is boxed so the local and remote variants are
/// interchangeable behind the same surface.
pub struct App {
    pub store: Box<dyn StoreBackend>,
    pub auth_gate: AuthGate,
    pub domain_manager: DomainManager,
    pub provider_manager: ProviderManager,
    pub domain_form: FormController<DomainDraft>,
    pub provider_form: FormController<ProviderDraft>,
    pub localization_engine: LocalizationEngine,
    pub theme_engine: ThemeEngine,
    /// Calendar cursor: (year, 0-based month).
    pub calendar_cursor: (i32, u32),
}

impl App {
    /// Creates an App over an explicit store backend.
    pub fn new(store: Box<dyn StoreBackend>) -> Self {
        let today = Local::now().date_naive();
        Self {
            store,
            auth_gate: AuthGate::new(),
            domain_manager: DomainManager::new(),
            provider_manager: ProviderManager::new(),
            domain_form: FormController::new(),
            provider_form: FormController::new(),
            localization_engine: LocalizationEngine::with_default_path(),
            theme_engine: ThemeEngine::new(),
            calendar_cursor: (today.year(), today.month0()),
        }
    }

    /// Single-user offline variant: local snapshot store, auto-admitted
    /// local user.
    pub fn with_local_store() -> Result<Self, StoreError> {
        let store = LocalStore::open()?;
        let mut app = Self::new(Box::new(store));
        let _ = app.auth_gate.sign_in(app.store.as_mut(), "local", "");
        Ok(app)
    }

    /// Hosted variant: remote document store, sign-in required before any
    /// data is visible.
    pub fn with_remote_store() -> Result<Self, StoreError> {
        let store = RemoteStore::connect()?;
        Ok(Self::new(Box::new(store)))
    }

    /// Startup sequence: load locale catalogs, pick the persisted (or
    /// system) locale, and apply the persisted theme.
    pub fn startup(&mut self) {
        let _ = self.localization_engine.initialize();

        if let Ok(settings) = self.store.load_settings() {
            if self.localization_engine.set_locale(&settings.language).is_err() {
                let locale = self.localization_engine.detect_system_locale();
                let _ = self.localization_engine.set_locale(&locale);
            }
            self.theme_engine.apply_settings(&settings);
        } else {
            let locale = self.localization_engine.detect_system_locale();
            let _ = self.localization_engine.set_locale(&locale);
        }
    }

    /// Shutdown sequence: stop the remote subscription, drop the session.
    pub fn shutdown(&mut self) {
        self.store.shutdown();
    }

    /// The reference instant for all derived views.
    pub fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    /// Drains pending change events from the store's subscription feed.
    pub fn pending_changes(&self) -> Vec<ChangeEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.store.poll_change() {
            events.push(event);
        }
        events
    }

    // Read-side composition shared by the shells.

    pub fn domains(&self) -> Result<Vec<Domain>, StoreError> {
        self.store.list_domains()
    }

    pub fn providers(&self) -> Result<Vec<Provider>, StoreError> {
        self.store.list_providers()
    }

    pub fn dashboard_stats(&self) -> Result<DashboardStats, StoreError> {
        Ok(stats_engine::dashboard_stats(&self.domains()?, self.now()))
    }

    pub fn urgent_renewals(&self) -> Result<Vec<UrgentRenewal>, StoreError> {
        Ok(stats_engine::urgent_renewals(&self.domains()?, self.now()))
    }

    pub fn monthly_expenses(&self) -> Result<MonthlyExpenses, StoreError> {
        Ok(stats_engine::monthly_expenses(&self.domains()?))
    }

    pub fn provider_shares(&self) -> Result<Vec<ProviderShare>, StoreError> {
        Ok(stats_engine::provider_shares(
            &self.providers()?,
            &self.domains()?,
        ))
    }

    pub fn notifications(&self) -> Result<Vec<Notification>, StoreError> {
        Ok(notification_engine::generate(&self.domains()?, self.now()))
    }

    /// The month grid at the current calendar cursor.
    pub fn calendar_month(&self) -> Result<MonthGrid, StoreError> {
        let (year, month0) = self.calendar_cursor;
        Ok(calendar_engine::month_grid(year, month0, &self.domains()?))
    }

    pub fn calendar_next(&mut self) {
        let (year, month0) = self.calendar_cursor;
        self.calendar_cursor = calendar_engine::next_month(year, month0);
    }

    pub fn calendar_prev(&mut self) {
        let (year, month0) = self.calendar_cursor;
        self.calendar_cursor = calendar_engine::prev_month(year, month0);
    }

    pub fn export_ics(&self) -> Result<String, ExportError> {
        let domains = self
            .domains()
            .map_err(|e| ExportError::InvalidDate(e.to_string()))?;
        ics_exporter::export_ics(&domains)
    }

    /// One-time migration after the first remote sign-in: when the remote
    /// collections are both empty and a local snapshot exists, its records
    /// are uploaded. Returns the number of migrated records.
    pub fn migrate_local_snapshot(&mut self) -> Result<usize, StoreError> {
        if !self.store.list_domains()?.is_empty() || !self.store.list_providers()?.is_empty() {
            return Ok(0);
        }

        let data_dir = crate::store::local::default_data_dir();
        if !data_dir.join("domains.json").exists() {
            return Ok(0);
        }
        let local = LocalStore::open_at(data_dir)?;

        let mut migrated = 0;
        for provider in local.list_providers()? {
            self.store.create_provider(provider)?;
            migrated += 1;
        }
        for domain in local.list_domains()? {
            self.store.create_domain(domain)?;
            migrated += 1;
        }
        Ok(migrated)
    }
}
