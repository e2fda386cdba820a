//! Focus capability
//!
//! Requesting input focus on a host element.

use crate::element::ElementHandle;
use crate::HostError;

/// Focus capability
///
/// Implementations move input focus to the given element.
pub trait FocusTarget {
    /// Requests focus on `element`
    fn focus(&mut self, element: &ElementHandle) -> Result<(), HostError>;

    /// Returns the currently focused element, if the host tracks it
    fn active_element(&self) -> Option<ElementHandle>;
}
