//! Raw browser keyboard event
//!
//! This module defines the snapshot of a host keyboard event as the page
//! script hands it over, before any interpretation.
//!
//! ## Design
//!
//! Browsers report the same key through several overlapping fields:
//! - `key`: the modern named key (`"ArrowUp"`, `"Enter"`, `"p"`)
//! - `keyCode`/`which`: legacy numeric codes (`38`, `13`, `80`)
//! - older engines use short names (`"Up"`, `"Down"`, `"Esc"`)
//!
//! All of them are kept verbatim here and none is derived from another.
//! Translation to `input_types` happens in `keyboard_translation`.

use serde::{Deserialize, Serialize};

use crate::DomInputError;

/// Host event type for a key going down
pub const KEYDOWN: &str = "keydown";
/// Host event type for a key going up
pub const KEYUP: &str = "keyup";

/// Raw keyboard event snapshot
///
/// Every field is optional on the wire; a missing field reads as zero,
/// empty or false, which is what the host reports for absent properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DomKeyEvent {
    /// Event type (`keydown`, `keyup`); empty when unknown
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub event_type: String,
    /// Legacy `which` code
    pub which: u32,
    /// Legacy `keyCode`
    pub key_code: u32,
    /// Named key
    pub key: String,
    /// Ctrl held
    pub ctrl_key: bool,
    /// Shift held
    pub shift_key: bool,
    /// Alt held
    pub alt_key: bool,
    /// Meta/Command held
    pub meta_key: bool,
    /// Auto-repeat
    pub repeat: bool,
}

impl DomKeyEvent {
    /// Creates an event carrying only a named key
    pub fn named(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Creates an event carrying only a legacy code (in both `which` and `keyCode`)
    pub fn legacy(code: u32) -> Self {
        Self {
            which: code,
            key_code: code,
            ..Self::default()
        }
    }

    /// Sets the Ctrl flag
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    /// Sets the event type
    pub fn with_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    /// Decodes an event from its JSON form
    pub fn from_json(json: &str) -> Result<Self, DomInputError> {
        serde_json::from_str(json).map_err(|e| DomInputError::Malformed(e.to_string()))
    }

    /// Returns true if this is a key-up event
    pub fn is_keyup(&self) -> bool {
        self.event_type == KEYUP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_event() {
        let ev = DomKeyEvent::from_json(
            r#"{"type":"keydown","which":80,"keyCode":80,"key":"p","ctrlKey":true}"#,
        )
        .unwrap();

        assert_eq!(ev.event_type, KEYDOWN);
        assert_eq!(ev.which, 80);
        assert_eq!(ev.key_code, 80);
        assert_eq!(ev.key, "p");
        assert!(ev.ctrl_key);
        assert!(!ev.shift_key);
    }

    #[test]
    fn test_decode_empty_object() {
        let ev = DomKeyEvent::from_json("{}").unwrap();
        assert_eq!(ev, DomKeyEvent::default());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let ev = DomKeyEvent::from_json(r#"{"key":"Down","code":"ArrowDown","location":0}"#)
            .unwrap();
        assert_eq!(ev.key, "Down");
    }

    #[test]
    fn test_decode_malformed() {
        let err = DomKeyEvent::from_json(r#"{"which":"thirteen"}"#).unwrap_err();
        assert!(matches!(err, DomInputError::Malformed(_)));
    }

    #[test]
    fn test_legacy_fills_both_fields() {
        let ev = DomKeyEvent::legacy(13);
        assert_eq!(ev.which, 13);
        assert_eq!(ev.key_code, 13);
        assert!(ev.key.is_empty());
    }

    #[test]
    fn test_is_keyup() {
        assert!(DomKeyEvent::named("a").with_type(KEYUP).is_keyup());
        assert!(!DomKeyEvent::named("a").with_type(KEYDOWN).is_keyup());
        assert!(!DomKeyEvent::named("a").is_keyup());
    }
}
