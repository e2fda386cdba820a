//! # Search UI Pipeline Tests
//!
//! End-to-end tests for the cheatsheet search box: raw browser key events
//! in, selection changes and highlighted result markup out.
//!
//! ## Test Philosophy
//!
//! - **Happy path**: type, navigate, render, focus
//! - **Both key conventions**: named keys and legacy codes reach the same outcome
//! - **Degenerate input**: empty result lists, missing elements, bad settings
//!
//! The `SearchSession` fixture strings the crates together the way page
//! script drives them.

use highlight::{Highlighter, MatchSpan};
use input_types::KeyEvent;
use search_keys::{classify, direction, step_selection, KeyClass};

/// One search result with its match spans
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub text: String,
    pub spans: Vec<MatchSpan>,
}

impl ResultRow {
    pub fn new(text: impl Into<String>, spans: Vec<MatchSpan>) -> Self {
        Self {
            text: text.into(),
            spans,
        }
    }
}

/// What the page should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Open the selected row
    Open(usize),
    /// Close the result list
    Dismiss,
    /// Selection moved
    Selected(usize),
    /// Nothing to do
    Ignore,
}

/// Minimal search box state driven by key events
#[derive(Debug)]
pub struct SearchSession {
    rows: Vec<ResultRow>,
    selected: usize,
    highlighter: Highlighter,
}

impl SearchSession {
    pub fn new(highlighter: Highlighter) -> Self {
        Self {
            rows: Vec::new(),
            selected: 0,
            highlighter,
        }
    }

    /// Replaces the result list; selection returns to the top
    pub fn set_results(&mut self, rows: Vec<ResultRow>) {
        self.rows = rows;
        self.selected = 0;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> SessionAction {
        match classify(event) {
            KeyClass::Enter if !self.rows.is_empty() => SessionAction::Open(self.selected),
            KeyClass::Escape => SessionAction::Dismiss,
            KeyClass::NavUp | KeyClass::NavDown => {
                match step_selection(self.selected, direction(event), self.rows.len()) {
                    Some(index) => {
                        self.selected = index;
                        SessionAction::Selected(index)
                    }
                    None => SessionAction::Ignore,
                }
            }
            _ => SessionAction::Ignore,
        }
    }

    /// Renders every row; the selected row is wrapped in a `<li class="selected">`
    pub fn render(&self) -> String {
        let mut html = String::new();
        for (index, row) in self.rows.iter().enumerate() {
            if index == self.selected {
                html.push_str("<li class=\"selected\">");
            } else {
                html.push_str("<li>");
            }
            html.push_str(&self.highlighter.render(&row.text, &row.spans));
            html.push_str("</li>");
        }
        html
    }
}
