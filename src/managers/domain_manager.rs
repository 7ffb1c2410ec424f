//! Domain Manager for Domain Vault.
//!
//! Validates domain form input and dispatches CRUD to the active store
//! backend. Malformed numeric or date fields are rejected here so they
//! never reach the stored collection or the aggregates.

use chrono::NaiveDate;

use crate::store::StoreBackend;
use crate::types::domain::{Domain, DomainDraft};
use crate::types::errors::DomainError;

/// Trait defining domain management operations.
pub trait DomainManagerTrait {
    fn add_domain(
        &mut self,
        store: &mut dyn StoreBackend,
        draft: &DomainDraft,
    ) -> Result<String, DomainError>;
    fn update_domain(
        &mut self,
        store: &mut dyn StoreBackend,
        id: &str,
        draft: &DomainDraft,
    ) -> Result<(), DomainError>;
    fn delete_domain(
        &mut self,
        store: &mut dyn StoreBackend,
        id: &str,
        confirmed: bool,
    ) -> Result<(), DomainError>;
    fn list_domains(&self, store: &dyn StoreBackend) -> Result<Vec<Domain>, DomainError>;
    fn get_domain(&self, store: &dyn StoreBackend, id: &str) -> Result<Domain, DomainError>;
    fn search_domains(
        &self,
        store: &dyn StoreBackend,
        query: &str,
    ) -> Result<Vec<Domain>, DomainError>;
}

/// Domain manager operating on whichever store backend is active.
pub struct DomainManager;

impl DomainManager {
    pub fn new() -> Self {
        Self
    }

    /// Validates the raw form draft and builds the record to persist.
    ///
    /// The id is left empty; the store assigns one on create and the
    /// caller's id wins on update.
    fn validate(draft: &DomainDraft) -> Result<Domain, DomainError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(DomainError::MissingField("domain name".to_string()));
        }
        let provider = draft.provider.trim();
        if provider.is_empty() {
            return Err(DomainError::MissingField("provider".to_string()));
        }
        let renewal_date = draft.renewal_date.trim();
        if renewal_date.is_empty() {
            return Err(DomainError::MissingField("renewal date".to_string()));
        }
        if NaiveDate::parse_from_str(renewal_date, "%Y-%m-%d").is_err() {
            return Err(DomainError::InvalidDate(renewal_date.to_string()));
        }

        let price_text = draft.price.trim();
        if price_text.is_empty() {
            return Err(DomainError::MissingField("price".to_string()));
        }
        let price = parse_price(price_text)?;

        let purchase_date = match draft.purchase_date.trim() {
            "" => None,
            text => {
                if NaiveDate::parse_from_str(text, "%Y-%m-%d").is_err() {
                    return Err(DomainError::InvalidDate(text.to_string()));
                }
                Some(text.to_string())
            }
        };
        let purchase_price = match draft.purchase_price.trim() {
            "" => None,
            text => Some(parse_price(text)?),
        };

        Ok(Domain {
            id: String::new(),
            name: name.to_string(),
            provider: provider.to_string(),
            renewal_date: renewal_date.to_string(),
            price,
            purchase_date,
            purchase_price,
            auto_renew: draft.auto_renew,
        })
    }
}

fn parse_price(text: &str) -> Result<f64, DomainError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(DomainError::InvalidPrice(text.to_string())),
    }
}

impl Default for DomainManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainManagerTrait for DomainManager {
    /// Validates and persists a new domain. Returns the assigned id.
    fn add_domain(
        &mut self,
        store: &mut dyn StoreBackend,
        draft: &DomainDraft,
    ) -> Result<String, DomainError> {
        let domain = Self::validate(draft)?;
        store
            .create_domain(domain)
            .map_err(|e| DomainError::Store(e.to_string()))
    }

    /// Full-field overwrite of an existing domain, keeping its id.
    fn update_domain(
        &mut self,
        store: &mut dyn StoreBackend,
        id: &str,
        draft: &DomainDraft,
    ) -> Result<(), DomainError> {
        self.get_domain(store, id)?;
        let domain = Self::validate(draft)?;
        store.update_domain(id, domain).map_err(|e| match e {
            crate::types::errors::StoreError::NotFound(id) => DomainError::NotFound(id),
            other => DomainError::Store(other.to_string()),
        })
    }

    /// Deletes a domain. The first call without confirmation is rejected so
    /// the UI can prompt.
    fn delete_domain(
        &mut self,
        store: &mut dyn StoreBackend,
        id: &str,
        confirmed: bool,
    ) -> Result<(), DomainError> {
        if !confirmed {
            return Err(DomainError::ConfirmationRequired);
        }
        store.delete_domain(id).map_err(|e| match e {
            crate::types::errors::StoreError::NotFound(id) => DomainError::NotFound(id),
            other => DomainError::Store(other.to_string()),
        })
    }

    fn list_domains(&self, store: &dyn StoreBackend) -> Result<Vec<Domain>, DomainError> {
        store
            .list_domains()
            .map_err(|e| DomainError::Store(e.to_string()))
    }

    fn get_domain(&self, store: &dyn StoreBackend, id: &str) -> Result<Domain, DomainError> {
        self.list_domains(store)?
            .into_iter()
            .find(|d| d.id == id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))
    }

    /// Case-insensitive substring search over domain name and provider.
    fn search_domains(
        &self,
        store: &dyn StoreBackend,
        query: &str,
    ) -> Result<Vec<Domain>, DomainError> {
        let needle = query.trim().to_lowercase();
        let domains = self.list_domains(store)?;
        if needle.is_empty() {
            return Ok(domains);
        }
        Ok(domains
            .into_iter()
            .filter(|d| {
                d.name.to_lowercase().contains(&needle)
                    || d.provider.to_lowercase().contains(&needle)
            })
            .collect())
    }
}
