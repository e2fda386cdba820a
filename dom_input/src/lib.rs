//! # DOM Input
//!
//! Keyboard events as the browser reports them, and their translation to
//! the canonical types in `input_types`.
//!
//! ## Philosophy
//!
//! **Key-name spellings stop at this crate.**
//!
//! Classification code never sees `"ArrowUp"` versus `"Up"`. It sees one
//! `KeyEvent`, produced here, with `which` and `keyCode` carried raw.

pub mod keyboard;
pub mod keyboard_translation;

pub use keyboard::{DomKeyEvent, KEYDOWN, KEYUP};
pub use keyboard_translation::{key_name_to_keycode, normalize};

use thiserror::Error;

/// DOM input error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomInputError {
    #[error("Malformed key event: {0}")]
    Malformed(String),
}

/// Decodes and normalizes a JSON key event in one step
pub fn parse_key_event(json: &str) -> Result<input_types::KeyEvent, DomInputError> {
    let raw = DomKeyEvent::from_json(json)?;
    Ok(normalize(&raw))
}
