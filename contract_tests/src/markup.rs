//! Highlight markup contract tests
//!
//! Stylesheets target `span.hili`; the exact markup is part of the contract.

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use highlight::{highlight, Escaping, Highlighter, MatchSpan};

    #[test]
    fn test_prefix_match_markup() {
        let html = highlight("hello world", &[MatchSpan::new(0, 5)]);
        verify_span_sequence(&html, 2);
        assert_eq!(html, r#"<span class="hili">hello</span><span> world</span>"#);
    }

    #[test]
    fn test_no_match_markup() {
        let html = highlight("abc", &[]);
        verify_span_sequence(&html, 1);
        assert_eq!(html, "<span>abc</span>");
    }

    #[test]
    fn test_alternating_markup() {
        let html = highlight("abcdef", &[MatchSpan::new(1, 1), MatchSpan::new(3, 2)]);
        verify_span_sequence(&html, 5);
        assert_eq!(
            html,
            concat!(
                "<span>a</span>",
                r#"<span class="hili">b</span>"#,
                "<span>c</span>",
                r#"<span class="hili">de</span>"#,
                "<span>f</span>",
            )
        );
    }

    #[test]
    fn test_empty_text_markup() {
        let html = highlight("", &[]);
        verify_span_sequence(&html, 0);
    }

    #[test]
    fn test_verbatim_markup_matches_escaped_for_plain_text() {
        let spans = [MatchSpan::new(2, 3)];
        let escaped = highlight("git rebase", &spans);
        let verbatim = Highlighter::new()
            .with_escaping(Escaping::Verbatim)
            .render("git rebase", &spans);
        assert_eq!(escaped, verbatim);
    }
}
