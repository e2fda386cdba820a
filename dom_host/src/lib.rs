//! # DOM Host
//!
//! Host capabilities the search UI reaches through traits instead of
//! globals: element lookup, focus, and randomness.
//!
//! ## Philosophy
//!
//! **The host must be fully abstracted and swappable.**
//!
//! A browser build implements these traits over the real document and
//! `Math.random()`. Tests use `SimDocument` and `SeededRandom`.
//!
//! ## Design Principles
//!
//! 1. **Trait-based**: every host operation goes through a trait
//! 2. **Explicit absence**: missing elements are `None` or `HostError`, never a fault
//! 3. **Testable**: the host can be simulated deterministically

pub mod element;
pub mod focus;
pub mod length;
pub mod random;
pub mod sim;

pub use element::{element_by_id, normalize_id, ElementHandle, ElementLookup};
pub use focus::FocusTarget;
pub use length::{len, Measured};
pub use random::{random_int, RandomSource, SeededRandom, ThreadRandom};
pub use sim::SimDocument;

use thiserror::Error;

/// Host error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("Element not found: #{0}")]
    ElementNotFound(String),

    #[error("Element cannot take focus: #{0}")]
    NotFocusable(String),
}

/// A full host: lookup plus focus
pub trait Host: ElementLookup + FocusTarget {}

impl<T: ElementLookup + FocusTarget + ?Sized> Host for T {}
