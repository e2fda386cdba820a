//! Splitting text into plain and highlighted segments
//!
//! This is the interval walk behind the renderer, kept separate so other
//! markup formats can reuse it.
//!
//! Offsets are Unicode scalar values (`char`s). JavaScript string indices
//! count UTF-16 code units instead, and the two differ for astral
//! characters such as emoji: a span computed in the browser over
//! `"🔍 grep"` starts one position later than the char offset. Callers
//! passing browser-side spans must convert them first.

use log::warn;

use crate::span::MatchSpan;

/// A run of source text and whether it is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

impl<'a> Segment<'a> {
    /// A plain segment
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            highlighted: false,
        }
    }

    /// A highlighted segment
    pub fn highlighted(text: &'a str) -> Self {
        Self {
            text,
            highlighted: true,
        }
    }
}

/// Character offset to byte offset table for a string
struct CharBounds<'a> {
    text: &'a str,
    bounds: Vec<usize>,
}

impl<'a> CharBounds<'a> {
    fn new(text: &'a str) -> Self {
        let bounds = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(core::iter::once(text.len()))
            .collect();
        Self { text, bounds }
    }

    fn char_len(&self) -> usize {
        self.bounds.len() - 1
    }

    /// Characters `[from, to)`, with both ends clamped to the text
    fn slice(&self, from: usize, to: usize) -> &'a str {
        let n = self.char_len();
        let from = from.min(n);
        let to = to.min(n).max(from);
        &self.text[self.bounds[from]..self.bounds[to]]
    }
}

/// Splits `text` into segments around `spans`
///
/// Spans must be ascending and non-overlapping; this is not checked.
/// Gaps between spans become plain segments, and empty gaps produce
/// nothing. Offsets past the end of the text are clamped.
pub fn segments<'a>(text: &'a str, spans: &[MatchSpan]) -> Vec<Segment<'a>> {
    let chars = CharBounds::new(text);
    let mut out = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;

    for span in spans {
        if span.start > cursor {
            out.push(Segment::plain(chars.slice(cursor, span.start)));
        } else if span.start < cursor {
            warn!(
                "match span at {} overlaps previous span ending at {}",
                span.start, cursor
            );
        }
        out.push(Segment::highlighted(chars.slice(span.start, span.end())));
        cursor = span.end();
    }

    if cursor < chars.char_len() {
        out.push(Segment::plain(chars.slice(cursor, chars.char_len())));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(pairs: &[(usize, usize)]) -> Vec<MatchSpan> {
        pairs.iter().copied().map(MatchSpan::from).collect()
    }

    #[test]
    fn test_no_spans() {
        assert_eq!(segments("abc", &[]), vec![Segment::plain("abc")]);
    }

    #[test]
    fn test_empty_text() {
        assert!(segments("", &[]).is_empty());
    }

    #[test]
    fn test_prefix_match() {
        assert_eq!(
            segments("hello world", &spans(&[(0, 5)])),
            vec![Segment::highlighted("hello"), Segment::plain(" world")]
        );
    }

    #[test]
    fn test_alternating() {
        assert_eq!(
            segments("abcdef", &spans(&[(1, 1), (3, 2)])),
            vec![
                Segment::plain("a"),
                Segment::highlighted("b"),
                Segment::plain("c"),
                Segment::highlighted("de"),
                Segment::plain("f"),
            ]
        );
    }

    #[test]
    fn test_adjacent_spans_have_no_empty_gap() {
        assert_eq!(
            segments("abcd", &spans(&[(0, 2), (2, 2)])),
            vec![Segment::highlighted("ab"), Segment::highlighted("cd")]
        );
    }

    #[test]
    fn test_whole_text_match() {
        assert_eq!(
            segments("abc", &spans(&[(0, 3)])),
            vec![Segment::highlighted("abc")]
        );
    }

    #[test]
    fn test_every_char_appears_once() {
        let text = "the quick brown fox";
        let segs = segments(text, &spans(&[(4, 5), (10, 5), (16, 3)]));
        let joined: String = segs.iter().map(|s| s.text).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_offsets_count_chars() {
        assert_eq!(
            segments("héllo wörld", &spans(&[(1, 1), (7, 1)])),
            vec![
                Segment::plain("h"),
                Segment::highlighted("é"),
                Segment::plain("llo w"),
                Segment::highlighted("ö"),
                Segment::plain("rld"),
            ]
        );
    }

    #[test]
    fn test_astral_chars_count_once() {
        assert_eq!(
            segments("🔍 grep", &spans(&[(2, 4)])),
            vec![Segment::plain("🔍 "), Segment::highlighted("grep")]
        );
        // UTF-16 offsets are shifted by one after the emoji
        assert_eq!(
            segments("🔍 grep", &spans(&[(3, 4)])),
            vec![Segment::plain("🔍 g"), Segment::highlighted("rep")]
        );
    }

    #[test]
    fn test_span_past_end_is_clamped() {
        assert_eq!(
            segments("abc", &spans(&[(1, 10)])),
            vec![Segment::plain("a"), Segment::highlighted("bc")]
        );
        assert_eq!(
            segments("abc", &spans(&[(5, 1)])),
            vec![Segment::plain("abc"), Segment::highlighted("")]
        );
    }

    #[test]
    fn test_overlapping_spans_duplicate_text() {
        assert_eq!(
            segments("abcdef", &spans(&[(0, 3), (2, 2)])),
            vec![
                Segment::highlighted("abc"),
                Segment::highlighted("cd"),
                Segment::plain("ef"),
            ]
        );
    }
}
