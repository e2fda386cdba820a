//! # Highlight
//!
//! Builds the HTML for a search result with its matched substrings marked.
//!
//! ## Example
//!
//! ```
//! use highlight::{highlight, MatchSpan};
//!
//! let html = highlight("hello world", &[MatchSpan::new(0, 5)]);
//! assert_eq!(html, r#"<span class="hili">hello</span><span> world</span>"#);
//! ```
//!
//! Spans come from the search side and are trusted to be ascending and
//! non-overlapping. `validate_spans` is there for callers that want to check.
//!
//! Span offsets count `char`s, not UTF-16 code units; see `segment` for the
//! consequence with emoji.

pub mod render;
pub mod segment;
pub mod span;

pub use render::{Escaping, Highlighter, DEFAULT_HIGHLIGHT_CLASS};
pub use segment::{segments, Segment};
pub use span::{parse_spans, validate_spans, MatchSpan};

use thiserror::Error;

/// Highlight error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HighlightError {
    #[error("Span {index} starts at {start}, before previous span end {previous_end}")]
    OutOfOrder {
        index: usize,
        start: usize,
        previous_end: usize,
    },

    #[error("Span {index} ends at {end}, past text length {text_len}")]
    OutOfBounds {
        index: usize,
        end: usize,
        text_len: usize,
    },

    #[error("Malformed span list: {0}")]
    Malformed(String),
}

/// Renders `text` with the default highlighter
pub fn highlight(text: &str, spans: &[MatchSpan]) -> String {
    Highlighter::new().render(text, spans)
}
