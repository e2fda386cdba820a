//! # Element Lookup
//!
//! Access to the host document's elements by id.
//!
//! ## Philosophy
//!
//! **The document is a capability, not a global.**
//!
//! Code that needs an element takes an `ElementLookup`. A browser build
//! implements it over the real document; tests use `SimDocument`.

use serde::{Deserialize, Serialize};

/// Opaque handle to a host element
///
/// Handles compare by element id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementHandle {
    id: String,
}

impl ElementHandle {
    /// Creates a handle for the element with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Returns the element id
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Element lookup capability
///
/// Mirrors the host's `getElementById`: exact id match, `None` if absent.
pub trait ElementLookup {
    /// Returns the element whose id equals `id`
    fn get_element_by_id(&self, id: &str) -> Option<ElementHandle>;
}

impl<T: ElementLookup + ?Sized> ElementLookup for &T {
    fn get_element_by_id(&self, id: &str) -> Option<ElementHandle> {
        (**self).get_element_by_id(id)
    }
}

/// Strips one leading `#` from an id-selector
pub fn normalize_id(id_or_selector: &str) -> &str {
    id_or_selector.strip_prefix('#').unwrap_or(id_or_selector)
}

/// Looks up an element by bare id or `#id` selector
pub fn element_by_id<L: ElementLookup + ?Sized>(
    lookup: &L,
    id_or_selector: &str,
) -> Option<ElementHandle> {
    lookup.get_element_by_id(normalize_id(id_or_selector))
}
