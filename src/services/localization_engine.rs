use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::types::errors::LocaleError;

/// Supported locales.
const SUPPORTED_LOCALES: &[&str] = &["en", "es"];

/// Default locale when the system locale is not supported.
const DEFAULT_LOCALE: &str = "en";

/// Trait defining the localization engine interface.
pub trait LocalizationEngineTrait {
    fn initialize(&mut self) -> Result<(), LocaleError>;
    fn set_locale(&mut self, lang: &str) -> Result<(), LocaleError>;
    fn get_locale(&self) -> &str;
    fn toggle_locale(&mut self) -> Result<(), LocaleError>;
    fn t(&self, key: &str, params: Option<&HashMap<String, String>>) -> String;
    fn detect_system_locale(&self) -> String;
    fn get_available_locales(&self) -> Vec<String>;
}

/// Localization engine managing the English and Spanish catalogs.
pub struct LocalizationEngine {
    /// Current active locale ("en" or "es").
    current_locale: String,
    /// Loaded catalogs: locale name to its parsed JSON value.
    locales: HashMap<String, Value>,
    /// Directory containing the locale JSON files.
    locales_dir: PathBuf,
}

impl LocalizationEngine {
    /// Creates a new LocalizationEngine with the given locales directory path.
    pub fn new(locales_dir: impl Into<PathBuf>) -> Self {
        Self {
            current_locale: DEFAULT_LOCALE.to_string(),
            locales: HashMap::new(),
            locales_dir: locales_dir.into(),
        }
    }

    /// Creates a new LocalizationEngine using the default `locales/` directory.
    pub fn with_default_path() -> Self {
        Self::new("locales")
    }

    /// Replaces `{param_name}` placeholders with values from the params map.
    fn interpolate(template: &str, params: &HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in params {
            let placeholder = format!("{{{}}}", key);
            result = result.replace(&placeholder, value);
        }
        result
    }
}

impl LocalizationEngineTrait for LocalizationEngine {
    /// Loads all locale JSON files from the locales directory.
    fn initialize(&mut self) -> Result<(), LocaleError> {
        let dir = &self.locales_dir;

        if !dir.exists() {
            return Err(LocaleError::FileNotFound(
                dir.to_string_lossy().to_string(),
            ));
        }

        for locale in SUPPORTED_LOCALES {
            let file_path = dir.join(format!("{}.json", locale));
            if file_path.exists() {
                let content = fs::read_to_string(&file_path).map_err(|e| {
                    LocaleError::FileNotFound(format!(
                        "{}: {}",
                        file_path.to_string_lossy(),
                        e
                    ))
                })?;
                let data: Value = serde_json::from_str(&content).map_err(|e| {
                    LocaleError::ParseError(format!(
                        "Failed to parse {}: {}",
                        file_path.to_string_lossy(),
                        e
                    ))
                })?;
                self.locales.insert(locale.to_string(), data);
            }
        }

        // At least one locale must be loaded
        if self.locales.is_empty() {
            return Err(LocaleError::FileNotFound(
                "No locale files found".to_string(),
            ));
        }

        Ok(())
    }

    /// Switches the active locale. Returns an error if the locale is not
    /// supported or not loaded.
    fn set_locale(&mut self, lang: &str) -> Result<(), LocaleError> {
        if !SUPPORTED_LOCALES.contains(&lang) {
            return Err(LocaleError::UnsupportedLocale(lang.to_string()));
        }
        if !self.locales.contains_key(lang) {
            return Err(LocaleError::FileNotFound(format!(
                "Locale '{}' not loaded",
                lang
            )));
        }
        self.current_locale = lang.to_string();
        Ok(())
    }

    /// Returns the current active locale.
    fn get_locale(&self) -> &str {
        &self.current_locale
    }

    /// Flips between English and Spanish, the translate button's behavior.
    fn toggle_locale(&mut self) -> Result<(), LocaleError> {
        let next = if self.current_locale == "en" { "es" } else { "en" };
        self.set_locale(next)
    }

    /// Looks up a translation key, optionally interpolating parameters.
    /// Returns the key itself if the translation is not found.
    fn t(&self, key: &str, params: Option<&HashMap<String, String>>) -> String {
        let data = match self.locales.get(&self.current_locale) {
            Some(d) => d,
            None => return key.to_string(),
        };

        let text = match data.get(key).and_then(|v| v.as_str()) {
            Some(s) => s.to_string(),
            None => return key.to_string(),
        };

        match params {
            Some(p) => Self::interpolate(&text, p),
            None => text,
        }
    }

    /// Detects the system locale from the `LANG` environment variable
    /// (e.g. "es_MX.UTF-8" yields "es"). Falls back to "en".
    fn detect_system_locale(&self) -> String {
        let lang = std::env::var("LANG").unwrap_or_default();

        let lang_code = lang
            .split('_')
            .next()
            .unwrap_or("")
            .split('.')
            .next()
            .unwrap_or("");

        if SUPPORTED_LOCALES.contains(&lang_code) {
            lang_code.to_string()
        } else {
            DEFAULT_LOCALE.to_string()
        }
    }

    /// Returns a list of all available (loaded) locales.
    fn get_available_locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.locales.keys().cloned().collect();
        locales.sort();
        locales
    }
}
