//! Rendering segments as HTML
//!
//! Each highlighted segment becomes `<span class="{class}">…</span>`, each
//! plain segment `<span>…</span>`.

use std::borrow::Cow;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::segment::{segments, Segment};
use crate::span::MatchSpan;

/// Default CSS class on highlighted spans
pub const DEFAULT_HIGHLIGHT_CLASS: &str = "hili";

/// How segment text is written into the markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Escaping {
    /// HTML-encode `&`, `<` and `>`
    #[default]
    Html,
    /// Insert text as-is; the caller vouches for it
    Verbatim,
}

/// HTML renderer for highlighted search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighter {
    class: String,
    escaping: Escaping,
}

impl Highlighter {
    /// Creates a renderer with the default class and HTML escaping
    pub fn new() -> Self {
        Self {
            class: DEFAULT_HIGHLIGHT_CLASS.to_string(),
            escaping: Escaping::Html,
        }
    }

    /// Sets the CSS class on highlighted spans
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Sets the escaping mode
    pub fn with_escaping(mut self, escaping: Escaping) -> Self {
        self.escaping = escaping;
        self
    }

    /// Renders `text` with `spans` highlighted
    pub fn render(&self, text: &str, spans: &[MatchSpan]) -> String {
        self.render_segments(&segments(text, spans))
    }

    /// Renders precomputed segments
    pub fn render_segments(&self, segments: &[Segment<'_>]) -> String {
        let class = html_escape::encode_double_quoted_attribute(&self.class);
        let mut html = String::new();
        for segment in segments {
            let text = self.encode(segment.text);
            // Writing into a String cannot fail.
            let _ = if segment.highlighted {
                write!(html, "<span class=\"{}\">{}</span>", class, text)
            } else {
                write!(html, "<span>{}</span>", text)
            };
        }
        html
    }

    fn encode<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.escaping {
            Escaping::Html => html_escape::encode_text(text),
            Escaping::Verbatim => Cow::Borrowed(text),
        }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}
