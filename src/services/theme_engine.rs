//! Theme engine: accent-color presets, custom colors, and the dark/light
//! mode toggle, projected as CSS variables.

use std::collections::HashMap;

use crate::types::errors::ThemeError;
use crate::types::settings::UserSettings;

/// Accent swatches offered in the settings page. "custom" is handled
/// separately through the color picker.
const ACCENT_PRESETS: &[(&str, &str)] = &[
    ("pink", "#ff5011"),
    ("blue", "#3b82f6"),
    ("green", "#22c55e"),
    ("purple", "#a855f7"),
];

/// RGB triple used when a color value cannot be parsed.
const FALLBACK_RGB: &str = "255, 80, 17";

/// Dark or light shell chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

/// Validates a hex color of the form `#rrggbb` (leading `#` optional).
fn is_valid_hex_color(color: &str) -> bool {
    let hex = color.strip_prefix('#').unwrap_or(color);
    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Converts a hex color to its `"r, g, b"` components. Anything that does
/// not parse falls back to the default accent's components.
pub fn hex_to_rgb(color: &str) -> String {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 {
        return FALLBACK_RGB.to_string();
    }
    let parse = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match (parse(0..2), parse(2..4), parse(4..6)) {
        (Some(r), Some(g), Some(b)) => format!("{}, {}, {}", r, g, b),
        _ => FALLBACK_RGB.to_string(),
    }
}

/// The theme engine implementation.
pub struct ThemeEngine {
    mode: ThemeMode,
    accent_color: String,
}

impl ThemeEngine {
    /// Creates a new ThemeEngine in dark mode with the default accent.
    pub fn new() -> Self {
        Self {
            mode: ThemeMode::Dark,
            accent_color: ACCENT_PRESETS[0].1.to_string(),
        }
    }

    /// Applies the persisted theme choice: a preset name, or "custom" with
    /// the stored custom color. Unknown presets keep the current accent.
    pub fn apply_settings(&mut self, settings: &UserSettings) {
        if settings.theme == "custom" {
            if let Some(color) = &settings.custom_color {
                let _ = self.set_custom_color(color);
            }
            return;
        }
        let _ = self.set_preset(&settings.theme);
    }

    /// Selects an accent preset by name.
    pub fn set_preset(&mut self, name: &str) -> Result<(), ThemeError> {
        let color = ACCENT_PRESETS
            .iter()
            .find(|(preset, _)| *preset == name)
            .map(|(_, color)| *color)
            .ok_or_else(|| ThemeError::InvalidColor(name.to_string()))?;
        self.accent_color = color.to_string();
        Ok(())
    }

    /// Sets a custom accent color from the color picker.
    pub fn set_custom_color(&mut self, color: &str) -> Result<(), ThemeError> {
        if !is_valid_hex_color(color) {
            return Err(ThemeError::InvalidColor(color.to_string()));
        }
        self.accent_color = color.to_string();
        Ok(())
    }

    pub fn accent_color(&self) -> &str {
        &self.accent_color
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flips between dark and light mode, returning the new mode.
    pub fn toggle_mode(&mut self) -> ThemeMode {
        self.mode = match self.mode {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        };
        self.mode
    }

    /// Builds the CSS variable map for the current mode and accent.
    pub fn css_variables(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();
        vars.insert("--primary".into(), self.accent_color.clone());
        vars.insert("--primary-rgb".into(), hex_to_rgb(&self.accent_color));
        match self.mode {
            ThemeMode::Dark => {
                vars.insert("--bg-primary".into(), "#0a0a0f".into());
                vars.insert("--bg-secondary".into(), "#14141c".into());
                vars.insert("--text-primary".into(), "#e6e6ef".into());
                vars.insert("--text-muted".into(), "#8a8a99".into());
                vars.insert("--border-color".into(), "#26262f".into());
            }
            ThemeMode::Light => {
                vars.insert("--bg-primary".into(), "#ffffff".into());
                vars.insert("--bg-secondary".into(), "#f4f4f8".into());
                vars.insert("--text-primary".into(), "#1a1a22".into());
                vars.insert("--text-muted".into(), "#5c5c6b".into());
                vars.insert("--border-color".into(), "#dcdce4".into());
            }
        }
        vars.insert("--danger".into(), "#ef4444".into());
        vars.insert("--warning".into(), "#f59e0b".into());
        vars
    }
}

impl Default for ThemeEngine {
    fn default() -> Self {
        Self::new()
    }
}
