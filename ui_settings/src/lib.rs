//! # UI Settings
//!
//! Configuration for the cheatsheet search UI.
//!
//! ## Philosophy
//!
//! - **Defaults baked in**: An empty settings document is a valid one
//! - **Versioned**: The format carries a version for future migrations
//! - **Validated on load**: Bad values are rejected, not discovered at render time
//!
//! ## Example
//!
//! ```
//! use ui_settings::UiSettings;
//!
//! let settings = UiSettings::from_json(r#"{"version":1,"highlight_class":"match"}"#).unwrap();
//! assert_eq!(settings.search_input_id, "cs-search-input");
//! assert_eq!(settings.highlight_class, "match");
//! ```

pub mod persistence;

pub use persistence::{deserialize_settings, load_settings_safe, serialize_settings};

use highlight::{Escaping, Highlighter, DEFAULT_HIGHLIGHT_CLASS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Id of the search input box
pub const DEFAULT_SEARCH_INPUT_ID: &str = "cs-search-input";

/// Settings error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Failed to serialize settings: {0}")]
    SerializationFailed(String),

    #[error("Failed to parse settings: {0}")]
    Parse(String),

    #[error("Unsupported settings version: {0}")]
    UnsupportedVersion(u32),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Search UI settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Version of the settings format
    pub version: u32,
    /// Id of the search input element (bare id or `#id`)
    pub search_input_id: String,
    /// CSS class on highlighted result spans
    pub highlight_class: String,
    /// Whether result text is HTML-escaped
    pub escaping: Escaping,
}

impl UiSettings {
    /// Current version of the settings format
    pub const CURRENT_VERSION: u32 = 1;

    /// Creates settings with every default
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            search_input_id: DEFAULT_SEARCH_INPUT_ID.to_string(),
            highlight_class: DEFAULT_HIGHLIGHT_CLASS.to_string(),
            escaping: Escaping::Html,
        }
    }

    /// Parses and validates a JSON settings document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        deserialize_settings(json.as_bytes())
    }

    /// Checks every field
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.version != Self::CURRENT_VERSION {
            return Err(SettingsError::UnsupportedVersion(self.version));
        }

        let id = self.search_input_id.strip_prefix('#').unwrap_or(&self.search_input_id);
        if id.is_empty() {
            return Err(SettingsError::Invalid {
                key: "search_input_id",
                reason: "must not be empty".to_string(),
            });
        }
        if id.chars().any(char::is_whitespace) {
            return Err(SettingsError::Invalid {
                key: "search_input_id",
                reason: format!("'{}' contains whitespace", id),
            });
        }

        if self.highlight_class.is_empty() {
            return Err(SettingsError::Invalid {
                key: "highlight_class",
                reason: "must not be empty".to_string(),
            });
        }
        if self.highlight_class.chars().any(char::is_whitespace) {
            return Err(SettingsError::Invalid {
                key: "highlight_class",
                reason: format!("'{}' must be a single class name", self.highlight_class),
            });
        }
        Ok(())
    }

    /// Builds the result renderer these settings describe
    pub fn highlighter(&self) -> Highlighter {
        Highlighter::new()
            .with_class(self.highlight_class.clone())
            .with_escaping(self.escaping)
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self::new()
    }
}
