//! Browser key to KeyEvent translation
//!
//! This module turns a raw `DomKeyEvent` into the canonical `KeyEvent` from
//! `input_types`.
//!
//! ## Rules
//!
//! - **Named key only**: `KeyCode` is decided by `key` alone
//! - **Legacy codes unmerged**: `which` and `keyCode` are copied as-is into
//!   `LegacyCodes`; neither stands in for the other or for `key`
//! - **Explicit "Unknown" fallback**: unrecognized names are `KeyCode::Unknown`

use input_types::{KeyCode, KeyEvent, KeyState, LegacyCodes, Modifiers};

use crate::keyboard::DomKeyEvent;

/// Translates a named key (`KeyboardEvent.key`) to a KeyCode
///
/// Accepts both the modern names and the short names older engines report.
/// Returns `None` for names this layer does not recognize.
pub fn key_name_to_keycode(name: &str) -> Option<KeyCode> {
    let code = match name {
        "ArrowUp" | "Up" => KeyCode::Up,
        "ArrowDown" | "Down" => KeyCode::Down,
        "ArrowLeft" | "Left" => KeyCode::Left,
        "ArrowRight" | "Right" => KeyCode::Right,
        "Enter" => KeyCode::Enter,
        "Escape" | "Esc" => KeyCode::Escape,
        "Tab" => KeyCode::Tab,
        "Backspace" => KeyCode::Backspace,
        " " | "Spacebar" => KeyCode::Space,
        _ => return None,
    };
    Some(code)
}

/// Translates a raw browser event to a canonical KeyEvent
pub fn normalize(event: &DomKeyEvent) -> KeyEvent {
    let code = key_name_to_keycode(&event.key).unwrap_or(KeyCode::Unknown);

    let modifiers = Modifiers::none()
        .with_if(Modifiers::CTRL, event.ctrl_key)
        .with_if(Modifiers::SHIFT, event.shift_key)
        .with_if(Modifiers::ALT, event.alt_key)
        .with_if(Modifiers::META, event.meta_key);

    let state = if event.is_keyup() {
        KeyState::Released
    } else if event.repeat {
        KeyState::Repeat
    } else {
        KeyState::Pressed
    };

    let key_event = KeyEvent::new(code, modifiers, state)
        .with_legacy(LegacyCodes::new(event.which, event.key_code));
    if event.key.chars().count() == 1 {
        key_event.with_text(event.key.as_str())
    } else {
        key_event
    }
}

impl From<&DomKeyEvent> for KeyEvent {
    fn from(event: &DomKeyEvent) -> Self {
        normalize(event)
    }
}
