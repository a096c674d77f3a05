//! Controller configuration.
//!
//! DESIGN
//! ======
//! Every identifier the controller touches (storage key, switch id, media
//! query, class tokens) lives here so a page can override them with a JSON
//! object without recompiling. Missing fields fall back to the defaults in
//! [`crate::consts`]; unknown fields are rejected so typos surface early.

use serde::Deserialize;

use crate::consts::{DARK_CLASS, DARK_QUERY, LIGHT_CLASS, STORAGE_KEY, SWITCH_ELEMENT_ID};
use crate::palette::Palette;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("{field} must be a single class token, got {value:?}")]
    NotAToken { field: &'static str, value: String },
    #[error("light_class and dark_class must differ, both are {0:?}")]
    SameClass(String),
}

/// Identifiers and switches for one controller instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    /// Key under which the stored preference is written.
    pub storage_key: String,
    /// Id of the optional toggle control.
    pub switch_id: String,
    /// Media query for the system dark-appearance signal.
    pub dark_query: String,
    /// Root class for [`Palette::Light`], also the stored token.
    pub light_class: String,
    /// Root class for [`Palette::Dark`], also the stored token.
    pub dark_class: String,
    /// Re-apply the system palette when it changes and nothing is stored.
    pub follow_system: bool,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            switch_id: SWITCH_ELEMENT_ID.to_owned(),
            dark_query: DARK_QUERY.to_owned(),
            light_class: LIGHT_CLASS.to_owned(),
            dark_class: DARK_CLASS.to_owned(),
            follow_system: false,
        }
    }
}

// =============================================================================
// LOADING
// =============================================================================

impl PaletteConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed JSON or unknown fields, and any error
    /// from [`PaletteConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config can uphold the single-class invariant.
    ///
    /// # Errors
    ///
    /// Returns `Empty` for blank identifiers, `NotAToken` for class names
    /// containing whitespace, and `SameClass` when both palettes share a token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("storage_key", &self.storage_key),
            ("switch_id", &self.switch_id),
            ("dark_query", &self.dark_query),
            ("light_class", &self.light_class),
            ("dark_class", &self.dark_class),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty(field));
            }
        }
        for (field, value) in [("light_class", &self.light_class), ("dark_class", &self.dark_class)] {
            if value.chars().any(char::is_whitespace) {
                return Err(ConfigError::NotAToken { field, value: value.clone() });
            }
        }
        if self.light_class == self.dark_class {
            return Err(ConfigError::SameClass(self.light_class.clone()));
        }
        Ok(())
    }

    // =========================================================================
    // TOKENS
    // =========================================================================

    /// Class token (and stored value) for `palette`.
    #[must_use]
    pub fn class_for(&self, palette: Palette) -> &str {
        match palette {
            Palette::Light => &self.light_class,
            Palette::Dark => &self.dark_class,
        }
    }

    /// Strictly map a class attribute or stored value back to a palette.
    ///
    /// Surrounding whitespace is tolerated; anything other than exactly one
    /// of the two configured tokens yields `None`.
    #[must_use]
    pub fn palette_for(&self, token: &str) -> Option<Palette> {
        let token = token.trim();
        Palette::ALL.into_iter().find(|p| self.class_for(*p) == token)
    }
}
