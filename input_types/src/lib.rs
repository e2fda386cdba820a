#![no_std]

//! # Input Types
//!
//! Canonical keyboard event types for the cheatsheet search UI.
//!
//! ## Philosophy
//!
//! - **Named keys are logical**: `KeyCode` comes from the host's key name only
//! - **Legacy codes are kept raw**: `which` and `keyCode` travel unmerged in
//!   `LegacyCodes`, because bindings are defined against one field or the other
//! - **Serializable**: Events can be recorded and replayed in tests
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A raw host event (see `dom_input::DomKeyEvent`)
//! - Keyboard layout or IME handling

extern crate alloc;

use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Keyboard event
///
/// A single key event after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// The logical key, from the host's key name
    pub code: KeyCode,
    /// Raw legacy numeric codes
    #[serde(default)]
    pub legacy: LegacyCodes,
    /// Modifier keys that were held
    pub modifiers: Modifiers,
    /// Event state (pressed, released, repeat)
    pub state: KeyState,
    /// Printable text carried by the host event, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl KeyEvent {
    /// Creates a new key event with no legacy codes
    pub fn new(code: KeyCode, modifiers: Modifiers, state: KeyState) -> Self {
        Self {
            code,
            legacy: LegacyCodes::default(),
            modifiers,
            state,
            text: None,
        }
    }

    /// Creates a key pressed event
    pub fn pressed(code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(code, modifiers, KeyState::Pressed)
    }

    /// Attaches the legacy codes
    pub fn with_legacy(mut self, legacy: LegacyCodes) -> Self {
        self.legacy = legacy;
        self
    }

    /// Attaches the printable text of the key
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Returns true if Ctrl was held and `keyCode` equals `key_code`
    pub fn is_ctrl_key_code(&self, key_code: u32) -> bool {
        self.modifiers.is_ctrl() && self.legacy.key_code == key_code
    }
}

/// Legacy numeric key codes as the host reported them
///
/// Zero means the host left the field unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LegacyCodes {
    /// `KeyboardEvent.which`
    pub which: u32,
    /// `KeyboardEvent.keyCode`
    pub key_code: u32,
}

impl LegacyCodes {
    pub const ENTER: u32 = 13;
    pub const ESCAPE: u32 = 27;
    pub const N: u32 = 78;
    pub const P: u32 = 80;

    /// Codes with both fields set
    pub fn new(which: u32, key_code: u32) -> Self {
        Self { which, key_code }
    }

    /// Codes where only `which` is set
    pub fn which(which: u32) -> Self {
        Self::new(which, 0)
    }

    /// Codes where only `keyCode` is set
    pub fn key_code(key_code: u32) -> Self {
        Self::new(0, key_code)
    }
}

/// Key state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyState {
    /// Key went down (`keydown`)
    Pressed,
    /// Key went up (`keyup`)
    Released,
    /// Key is auto-repeating
    Repeat,
}

/// Named keys the search box recognizes
///
/// Printable characters and unnamed keys are `Unknown`; their text, if
/// any, is in `KeyEvent::text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Tab,
    Backspace,
    Space,
    Unknown,
}

/// Modifier keys held during an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    pub const CTRL: Self = Self { bits: 0b0001 };
    pub const ALT: Self = Self { bits: 0b0010 };
    pub const SHIFT: Self = Self { bits: 0b0100 };
    pub const META: Self = Self { bits: 0b1000 };

    /// Empty set
    pub fn none() -> Self {
        Self::default()
    }

    /// Adds `other` when `held` is set
    pub fn with_if(self, other: Modifiers, held: bool) -> Self {
        if held {
            Self {
                bits: self.bits | other.bits,
            }
        } else {
            self
        }
    }

    /// Checks if every modifier in `other` is held
    pub fn contains(&self, other: Modifiers) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Checks if Ctrl is held
    pub fn is_ctrl(&self) -> bool {
        self.contains(Self::CTRL)
    }
}
