//! # Contract Tests
//!
//! "Golden" tests for the formats the search UI exchanges with page
//! script, so they don't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Wire formats and markup shape are written as code
//! - **Testability first**: Contract tests fail when a format changes
//!
//! ## Structure
//!
//! - `key_events`: raw key event JSON and the classification it yields
//! - `match_spans`: the `[[start, len], ...]` span list
//! - `markup`: exact HTML produced by the highlighter
//! - `settings`: the settings document

pub mod key_events;
pub mod markup;
pub mod match_spans;
pub mod settings;

/// Common test helpers for contract validation
pub mod test_helpers {
    use serde::Serialize;
    use serde_json::Value;

    /// Serializes `value` and returns its JSON tree
    pub fn to_json_value<T: Serialize>(value: &T) -> Value {
        serde_json::to_value(value).expect("Failed to serialize value")
    }

    /// Verifies a JSON object has exactly the expected field names
    pub fn verify_field_names(value: &Value, expected: &[&str]) {
        let object = value.as_object().expect("Expected a JSON object");
        let mut actual: Vec<&str> = object.keys().map(String::as_str).collect();
        actual.sort_unstable();
        let mut expected = expected.to_vec();
        expected.sort_unstable();
        assert_eq!(
            actual, expected,
            "Field names changed: expected {:?}, got {:?}",
            expected, actual
        );
    }

    /// Verifies markup is a sequence of `<span>` elements and nothing else
    pub fn verify_span_sequence(html: &str, expected_spans: usize) {
        let opened = html.matches("<span").count();
        let closed = html.matches("</span>").count();
        assert_eq!(opened, closed, "Unbalanced spans in {:?}", html);
        assert_eq!(
            opened, expected_spans,
            "Span count changed: expected {}, got {} in {:?}",
            expected_spans, opened, html
        );
        if !html.is_empty() {
            assert!(html.starts_with("<span"), "Markup must start with a span: {:?}", html);
            assert!(html.ends_with("</span>"), "Markup must end with a span: {:?}", html);
        }
    }
}
