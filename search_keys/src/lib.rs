#![no_std]

//! # Search Keys
//!
//! Keyboard classification for the cheatsheet search box.
//!
//! ## Bindings
//!
//! - Enter (`which` 13): open the selected result
//! - Escape (`which` 27): dismiss
//! - Up, or Ctrl with `keyCode` 80 (P): move selection up
//! - Down, or Ctrl with `keyCode` 78 (N): move selection down
//!
//! Each binding reads one field of the host event. Arrows come from the
//! named key only, Enter and Escape from `which`, and the Ctrl chords from
//! `keyCode`. A field the binding does not name never counts.

use input_types::{KeyCode, KeyEvent, LegacyCodes};
use serde::{Deserialize, Serialize};

/// Returns true if `which` is Enter
pub fn is_enter(event: &KeyEvent) -> bool {
    event.legacy.which == LegacyCodes::ENTER
}

/// Returns true if `which` is Escape
pub fn is_escape(event: &KeyEvent) -> bool {
    event.legacy.which == LegacyCodes::ESCAPE
}

/// Returns true if the named key is the Up arrow
pub fn is_up(event: &KeyEvent) -> bool {
    event.code == KeyCode::Up
}

/// Returns true if the named key is the Down arrow
pub fn is_down(event: &KeyEvent) -> bool {
    event.code == KeyCode::Down
}

/// Navigation up is: Up or Ctrl+P
pub fn is_nav_up(event: &KeyEvent) -> bool {
    is_up(event) || event.is_ctrl_key_code(LegacyCodes::P)
}

/// Navigation down is: Down or Ctrl+N
pub fn is_nav_down(event: &KeyEvent) -> bool {
    is_down(event) || event.is_ctrl_key_code(LegacyCodes::N)
}

/// Navigation direction in a result list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavDirection {
    /// Move selection up
    Up,
    /// No movement
    None,
    /// Move selection down
    Down,
}

impl NavDirection {
    /// Returns the signed step: -1, 0 or +1
    pub fn step(&self) -> i32 {
        match self {
            Self::Up => -1,
            Self::None => 0,
            Self::Down => 1,
        }
    }
}

/// Returns the navigation direction of a key event
///
/// Nav-up is checked first, so an event matching both resolves to `Up`.
pub fn direction(event: &KeyEvent) -> NavDirection {
    if is_nav_up(event) {
        NavDirection::Up
    } else if is_nav_down(event) {
        NavDirection::Down
    } else {
        NavDirection::None
    }
}

/// What a key event means to the search box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyClass {
    Enter,
    Escape,
    NavUp,
    NavDown,
    Neutral,
}

/// Classifies a key event
pub fn classify(event: &KeyEvent) -> KeyClass {
    if is_enter(event) {
        return KeyClass::Enter;
    }
    if is_escape(event) {
        return KeyClass::Escape;
    }
    match direction(event) {
        NavDirection::Up => KeyClass::NavUp,
        NavDirection::Down => KeyClass::NavDown,
        NavDirection::None => KeyClass::Neutral,
    }
}

/// Moves a selection index one step in `direction`, wrapping at both ends
///
/// Returns `None` when the list is empty. An out-of-range `selected` is
/// clamped to the last entry first.
pub fn step_selection(selected: usize, direction: NavDirection, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let selected = selected.min(count - 1);
    let next = match direction {
        NavDirection::Up => {
            if selected == 0 {
                count - 1
            } else {
                selected - 1
            }
        }
        NavDirection::Down => (selected + 1) % count,
        NavDirection::None => selected,
    };
    Some(next)
}
