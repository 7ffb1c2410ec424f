//! Provider Manager for Domain Vault.
//!
//! Validates provider form input, dispatches CRUD to the store, and guards
//! deletion: a provider with domains still pointing at it can only be
//! deleted after explicit confirmation, and the domains are never cascade
//! deleted.

use crate::store::StoreBackend;
use crate::types::errors::ProviderError;
use crate::types::provider::{CredentialView, Provider, ProviderDraft};

/// Trait defining provider management operations.
pub trait ProviderManagerTrait {
    fn add_provider(
        &mut self,
        store: &mut dyn StoreBackend,
        draft: &ProviderDraft,
    ) -> Result<String, ProviderError>;
    fn update_provider(
        &mut self,
        store: &mut dyn StoreBackend,
        id: &str,
        draft: &ProviderDraft,
    ) -> Result<(), ProviderError>;
    fn delete_provider(
        &mut self,
        store: &mut dyn StoreBackend,
        id: &str,
        confirmed: bool,
    ) -> Result<(), ProviderError>;
    fn list_providers(&self, store: &dyn StoreBackend) -> Result<Vec<Provider>, ProviderError>;
    fn get_provider(&self, store: &dyn StoreBackend, id: &str)
        -> Result<Provider, ProviderError>;
    fn credentials(
        &self,
        store: &dyn StoreBackend,
        id: &str,
    ) -> Result<CredentialView, ProviderError>;
}

/// Provider manager operating on whichever store backend is active.
pub struct ProviderManager;

impl ProviderManager {
    pub fn new() -> Self {
        Self
    }

    /// Validates the raw form draft. Name and URL are mandatory; the
    /// credential fields may stay empty.
    fn validate(draft: &ProviderDraft) -> Result<Provider, ProviderError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ProviderError::MissingField("provider name".to_string()));
        }
        let url = draft.url.trim();
        if url.is_empty() {
            return Err(ProviderError::MissingField("website URL".to_string()));
        }

        Ok(Provider {
            id: String::new(),
            name: name.to_string(),
            url: url.to_string(),
            username: draft.username.trim().to_string(),
            password: draft.password.clone(),
            user_id: draft.user_id.trim().to_string(),
        })
    }

    /// Counts the domains whose provider field references this provider by
    /// display name.
    fn referencing_domains(
        store: &dyn StoreBackend,
        provider_name: &str,
    ) -> Result<usize, ProviderError> {
        let domains = store
            .list_domains()
            .map_err(|e| ProviderError::Store(e.to_string()))?;
        Ok(domains.iter().filter(|d| d.provider == provider_name).count())
    }
}

impl Default for ProviderManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderManagerTrait for ProviderManager {
    /// Validates and persists a new provider. Returns the assigned id.
    fn add_provider(
        &mut self,
        store: &mut dyn StoreBackend,
        draft: &ProviderDraft,
    ) -> Result<String, ProviderError> {
        let provider = Self::validate(draft)?;
        store
            .create_provider(provider)
            .map_err(|e| ProviderError::Store(e.to_string()))
    }

    /// Full-field overwrite of an existing provider, keeping its id.
    fn update_provider(
        &mut self,
        store: &mut dyn StoreBackend,
        id: &str,
        draft: &ProviderDraft,
    ) -> Result<(), ProviderError> {
        self.get_provider(store, id)?;
        let provider = Self::validate(draft)?;
        store.update_provider(id, provider).map_err(|e| match e {
            crate::types::errors::StoreError::NotFound(id) => ProviderError::NotFound(id),
            other => ProviderError::Store(other.to_string()),
        })
    }

    /// Deletes a provider. Without confirmation the call is rejected with
    /// the count of domains still referencing it, so the UI can show the
    /// prompt. Confirmed deletion leaves those domains untouched.
    fn delete_provider(
        &mut self,
        store: &mut dyn StoreBackend,
        id: &str,
        confirmed: bool,
    ) -> Result<(), ProviderError> {
        let provider = self.get_provider(store, id)?;
        if !confirmed {
            let count = Self::referencing_domains(store, &provider.name)?;
            return Err(ProviderError::ConfirmationRequired(count));
        }
        store.delete_provider(id).map_err(|e| match e {
            crate::types::errors::StoreError::NotFound(id) => ProviderError::NotFound(id),
            other => ProviderError::Store(other.to_string()),
        })
    }

    fn list_providers(&self, store: &dyn StoreBackend) -> Result<Vec<Provider>, ProviderError> {
        store
            .list_providers()
            .map_err(|e| ProviderError::Store(e.to_string()))
    }

    fn get_provider(
        &self,
        store: &dyn StoreBackend,
        id: &str,
    ) -> Result<Provider, ProviderError> {
        self.list_providers(store)?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ProviderError::NotFound(id.to_string()))
    }

    /// Stored login for the credentials dialog, with "Not set" filled in
    /// for empty fields.
    fn credentials(
        &self,
        store: &dyn StoreBackend,
        id: &str,
    ) -> Result<CredentialView, ProviderError> {
        let provider = self.get_provider(store, id)?;
        Ok(CredentialView::from_provider(&provider))
    }
}
