//! Key event contract tests
//!
//! Page script posts `KeyboardEvent` snapshots as JSON. These tests pin the
//! field names it must use and what each binding classifies as.

use dom_input::parse_key_event;
use search_keys::{classify, direction, KeyClass, NavDirection};

// ===== Field names on the wire =====
pub const FIELD_TYPE: &str = "type";
pub const FIELD_WHICH: &str = "which";
pub const FIELD_KEY_CODE: &str = "keyCode";
pub const FIELD_KEY: &str = "key";
pub const FIELD_CTRL: &str = "ctrlKey";

/// Classifies a JSON key event the way the search box does
pub fn classify_json(json: &str) -> KeyClass {
    let event = parse_key_event(json).expect("Key event must decode");
    classify(&event)
}

/// Direction of a JSON key event
pub fn direction_json(json: &str) -> NavDirection {
    let event = parse_key_event(json).expect("Key event must decode");
    direction(&event)
}
