//! # Simulated Document
//!
//! An in-memory host document for tests and headless use.
//!
//! ## Purpose
//!
//! - Runs under `cargo test`, no browser needed
//! - Deterministic: elements, focusability and focus are explicit state
//! - Inspectable: every focus change is kept in `focus_history`

use std::collections::BTreeMap;

use crate::element::{ElementHandle, ElementLookup};
use crate::focus::FocusTarget;
use crate::HostError;

#[derive(Debug, Clone)]
struct SimElement {
    focusable: bool,
}

/// Simulated host document
#[derive(Debug, Default)]
pub struct SimDocument {
    elements: BTreeMap<String, SimElement>,
    focused: Option<ElementHandle>,
    focus_history: Vec<ElementHandle>,
}

impl SimDocument {
    /// Creates an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a focusable element with the given id
    pub fn add_element(&mut self, id: impl Into<String>) -> ElementHandle {
        self.insert(id.into(), true)
    }

    /// Adds an element that refuses focus (e.g. a disabled input)
    pub fn add_unfocusable_element(&mut self, id: impl Into<String>) -> ElementHandle {
        self.insert(id.into(), false)
    }

    fn insert(&mut self, id: String, focusable: bool) -> ElementHandle {
        let handle = ElementHandle::new(id.clone());
        self.elements.insert(id, SimElement { focusable });
        handle
    }

    /// Removes an element; clears focus if it was focused
    pub fn remove_element(&mut self, id: &str) -> bool {
        if self.focused.as_ref().is_some_and(|f| f.id() == id) {
            self.focused = None;
        }
        self.elements.remove(id).is_some()
    }

    /// Returns every element that received focus, in order
    pub fn focus_history(&self) -> &[ElementHandle] {
        &self.focus_history
    }
}

impl ElementLookup for SimDocument {
    fn get_element_by_id(&self, id: &str) -> Option<ElementHandle> {
        self.elements
            .contains_key(id)
            .then(|| ElementHandle::new(id))
    }
}

impl FocusTarget for SimDocument {
    fn focus(&mut self, element: &ElementHandle) -> Result<(), HostError> {
        let sim = self
            .elements
            .get(element.id())
            .ok_or_else(|| HostError::ElementNotFound(element.id().to_string()))?;

        if !sim.focusable {
            return Err(HostError::NotFocusable(element.id().to_string()));
        }

        self.focused = Some(element.clone());
        self.focus_history.push(element.clone());
        Ok(())
    }

    fn active_element(&self) -> Option<ElementHandle> {
        self.focused.clone()
    }
}
