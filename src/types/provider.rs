use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A domain registrar / provider account.
///
/// Credentials are persisted as-is (the snapshot and the remote collections
/// both store plaintext); in memory the struct zeroizes its fields on drop
/// and keeps the password out of `Debug` output.
#[derive(Clone, PartialEq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Account identifier at the provider, not the signed-in user.
    #[serde(default)]
    pub user_id: String,
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Raw provider form input, prior to validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderDraft {
    pub name: String,
    pub url: String,
    pub username: String,
    pub password: String,
    pub user_id: String,
}

impl ProviderDraft {
    /// Pre-fills a draft from an existing record, for the edit form.
    pub fn from_provider(provider: &Provider) -> Self {
        Self {
            name: provider.name.clone(),
            url: provider.url.clone(),
            username: provider.username.clone(),
            password: provider.password.clone(),
            user_id: provider.user_id.clone(),
        }
    }
}

/// Credential view returned to the UI when the user asks to see a
/// provider's stored login.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CredentialView {
    pub username: String,
    pub password: String,
    pub user_id: String,
}

impl CredentialView {
    /// Builds the view, substituting "Not set" for empty fields like the
    /// credentials dialog does.
    pub fn from_provider(provider: &Provider) -> Self {
        let or_not_set = |s: &str| {
            if s.is_empty() {
                "Not set".to_string()
            } else {
                s.to_string()
            }
        };
        Self {
            username: or_not_set(&provider.username),
            password: or_not_set(&provider.password),
            user_id: or_not_set(&provider.user_id),
        }
    }
}
