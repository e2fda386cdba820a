//! # Search Focus Service
//!
//! Moves input focus to the cheatsheet search box.
//!
//! ## Philosophy
//!
//! - **Explicit focus**: Focus goes through the host's `FocusTarget`, never a global document
//! - **No silent faults**: A missing search box is an error value, not a crash
//! - **Auditable**: Every focus attempt is recorded
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A focus stack or window manager
//! - Event wiring (callers decide when to focus)

use dom_host::{element_by_id, normalize_id, Host, HostError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ui_settings::UiSettings;

/// Focus error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FocusError {
    #[error("Search input not found: #{id}")]
    ElementNotFound { id: String },

    #[error(transparent)]
    Host(#[from] HostError),
}

/// Focus event for audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusEvent {
    /// Focus was moved to the element
    Granted { element_id: String, sequence: u64 },
    /// Focus could not be moved
    Denied {
        element_id: String,
        reason: String,
        sequence: u64,
    },
}

impl FocusEvent {
    /// Returns the sequence number of the event
    pub fn sequence(&self) -> u64 {
        match self {
            Self::Granted { sequence, .. } | Self::Denied { sequence, .. } => *sequence,
        }
    }
}

/// Search focus service
pub struct SearchFocus {
    /// Bare id of the search input
    search_input_id: String,
    /// Audit trail of focus attempts
    audit_trail: Vec<FocusEvent>,
    /// Next sequence number
    next_sequence: u64,
}

impl SearchFocus {
    /// Creates a service targeting the default search input
    pub fn new() -> Self {
        Self::with_input_id(ui_settings::DEFAULT_SEARCH_INPUT_ID)
    }

    /// Creates a service targeting the given id or `#id` selector
    pub fn with_input_id(id_or_selector: &str) -> Self {
        Self {
            search_input_id: normalize_id(id_or_selector).to_string(),
            audit_trail: Vec::new(),
            next_sequence: 0,
        }
    }

    /// Creates a service from UI settings
    pub fn from_settings(settings: &UiSettings) -> Self {
        Self::with_input_id(&settings.search_input_id)
    }

    /// Returns the bare id of the search input
    pub fn search_input_id(&self) -> &str {
        &self.search_input_id
    }

    /// Focuses the search input
    ///
    /// Looks the element up through `host` and asks the host to focus it.
    pub fn focus_search<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<(), FocusError> {
        let sequence = self.next_sequence();
        let id = self.search_input_id.clone();

        let result = match element_by_id(&*host, &id) {
            Some(element) => host.focus(&element).map_err(FocusError::from),
            None => Err(FocusError::ElementNotFound { id: id.clone() }),
        };

        match &result {
            Ok(()) => {
                debug!("focused search input #{}", id);
                self.audit_trail.push(FocusEvent::Granted {
                    element_id: id,
                    sequence,
                });
            }
            Err(e) => {
                warn!("could not focus search input: {}", e);
                self.audit_trail.push(FocusEvent::Denied {
                    element_id: id,
                    reason: e.to_string(),
                    sequence,
                });
            }
        }
        result
    }

    /// Returns true if the host's active element is the search input
    pub fn is_focused<H: Host + ?Sized>(&self, host: &H) -> bool {
        host.active_element()
            .is_some_and(|el| el.id() == self.search_input_id)
    }

    /// Returns the audit trail
    pub fn audit_trail(&self) -> &[FocusEvent] {
        &self.audit_trail
    }

    /// Clears the audit trail (for testing)
    #[cfg(test)]
    pub fn clear_audit_trail(&mut self) {
        self.audit_trail.clear();
    }

    fn next_sequence(&mut self) -> u64 {
        let seq = self.next_sequence;
        self.next_sequence += 1;
        seq
    }
}

impl Default for SearchFocus {
    fn default() -> Self {
        Self::new()
    }
}
