//! Settings persistence layer
//!
//! Loading and saving `UiSettings` as JSON. Loading always validates.

use log::{debug, warn};

use crate::{SettingsError, UiSettings};

/// Serializes settings to pretty-printed JSON bytes
pub fn serialize_settings(settings: &UiSettings) -> Result<Vec<u8>, SettingsError> {
    serde_json::to_vec_pretty(settings).map_err(|e| SettingsError::SerializationFailed(e.to_string()))
}

/// Deserializes and validates settings from JSON bytes
pub fn deserialize_settings(bytes: &[u8]) -> Result<UiSettings, SettingsError> {
    let settings: UiSettings =
        serde_json::from_slice(bytes).map_err(|e| SettingsError::Parse(e.to_string()))?;

    settings.validate()?;

    debug!(
        "loaded ui settings: search input #{}, highlight class '{}', escaping {:?}",
        settings.search_input_id.trim_start_matches('#'),
        settings.highlight_class,
        settings.escaping
    );
    Ok(settings)
}

/// Loads settings from bytes, falling back to defaults on error
pub fn load_settings_safe(bytes: &[u8]) -> UiSettings {
    deserialize_settings(bytes).unwrap_or_else(|e| {
        warn!("falling back to default ui settings: {}", e);
        UiSettings::new()
    })
}
