use serde::{Deserialize, Serialize};

/// Per-user application settings: one record per user.
///
/// Stored as a singleton object in the local snapshot, or as one document
/// keyed by the user id in the remote settings collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub username: String,
    /// Accent preset name, or "custom" when `custom_color` is set.
    pub theme: String,
    #[serde(default)]
    pub custom_color: Option<String>,
    /// Profile picture as a data URL, if one was uploaded.
    #[serde(default)]
    pub profile_picture: Option<String>,
    pub language: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            username: "User".to_string(),
            theme: "pink".to_string(),
            custom_color: None,
            profile_picture: None,
            language: "en".to_string(),
        }
    }
}

impl UserSettings {
    /// Field-wise merge of a partial update into this record.
    ///
    /// `None` fields in `patch` leave the current value untouched; this is
    /// the merge semantics of the remote settings document.
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(custom_color) = patch.custom_color {
            self.custom_color = custom_color;
        }
        if let Some(profile_picture) = patch.profile_picture {
            self.profile_picture = profile_picture;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
    }
}

/// Distinguishes an absent field (outer `None`, via `default`) from an
/// explicit JSON `null` (`Some(None)`) during deserialization.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

/// Partial settings update. Outer `None` means "leave unchanged"; inner
/// `None` on the optional fields means "clear".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_color: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_picture: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}
