//! Match spans
//!
//! A span is `(start, length)` in characters of the source text. On the
//! wire a span list is a JSON array of pairs: `[[0, 5], [8, 2]]`.

use serde::{Deserialize, Serialize};

use crate::HighlightError;

/// A highlighted span within a source string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct MatchSpan {
    /// Offset of the first highlighted character
    pub start: usize,
    /// Number of highlighted characters
    pub len: usize,
}

impl MatchSpan {
    /// Creates a new span
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Offset one past the last highlighted character
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.len)
    }

    /// Returns true if the span covers no characters
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl From<(usize, usize)> for MatchSpan {
    fn from((start, len): (usize, usize)) -> Self {
        Self::new(start, len)
    }
}

impl From<MatchSpan> for (usize, usize) {
    fn from(span: MatchSpan) -> Self {
        (span.start, span.len)
    }
}

/// Decodes a span list from its JSON form
pub fn parse_spans(json: &str) -> Result<Vec<MatchSpan>, HighlightError> {
    serde_json::from_str(json).map_err(|e| HighlightError::Malformed(e.to_string()))
}

/// Checks that spans are ascending, non-overlapping and inside the text
///
/// `text_len` is in characters. Reports the first violation.
pub fn validate_spans(text_len: usize, spans: &[MatchSpan]) -> Result<(), HighlightError> {
    let mut cursor = 0;
    for (index, span) in spans.iter().enumerate() {
        if span.start < cursor {
            return Err(HighlightError::OutOfOrder {
                index,
                start: span.start,
                previous_end: cursor,
            });
        }
        if span.end() > text_len {
            return Err(HighlightError::OutOfBounds {
                index,
                end: span.end(),
                text_len,
            });
        }
        cursor = span.end();
    }
    Ok(())
}
