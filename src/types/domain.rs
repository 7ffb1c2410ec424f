use serde::{Deserialize, Serialize};

/// A tracked domain registration.
///
/// Serialized with the camelCase field names used by the snapshot format and
/// the remote document collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: String,
    pub name: String,
    /// Provider referenced by display name, not by id.
    pub provider: String,
    /// Renewal date as a `YYYY-MM-DD` string.
    pub renewal_date: String,
    /// Annual renewal price in dollars.
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(default)]
    pub auto_renew: bool,
}

/// Raw domain form input, prior to validation.
///
/// Everything arrives as text from the form; the domain manager validates
/// presence and parses the numeric and date fields on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainDraft {
    pub name: String,
    pub provider: String,
    pub renewal_date: String,
    pub price: String,
    pub purchase_date: String,
    pub purchase_price: String,
    pub auto_renew: bool,
}

impl DomainDraft {
    /// Pre-fills a draft from an existing record, for the edit form.
    pub fn from_domain(domain: &Domain) -> Self {
        Self {
            name: domain.name.clone(),
            provider: domain.provider.clone(),
            renewal_date: domain.renewal_date.clone(),
            price: format!("{:.2}", domain.price),
            purchase_date: domain.purchase_date.clone().unwrap_or_default(),
            purchase_price: domain
                .purchase_price
                .map(|p| format!("{:.2}", p))
                .unwrap_or_default(),
            auto_renew: domain.auto_renew,
        }
    }
}

/// Renewal status derived from the signed days-left count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainStatus {
    Active,
    Expiring,
    Expired,
}

impl DomainStatus {
    /// Classifies a signed days-left value.
    pub fn from_days_left(days_left: i64) -> Self {
        if days_left < 0 {
            DomainStatus::Expired
        } else if days_left <= 30 {
            DomainStatus::Expiring
        } else {
            DomainStatus::Active
        }
    }

    /// Human-readable badge text.
    pub fn label(&self) -> &'static str {
        match self {
            DomainStatus::Active => "Active",
            DomainStatus::Expiring => "Expiring Soon",
            DomainStatus::Expired => "Expired",
        }
    }

    /// CSS class suffix for the status badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            DomainStatus::Active => "active",
            DomainStatus::Expiring => "warning",
            DomainStatus::Expired => "expired",
        }
    }
}
