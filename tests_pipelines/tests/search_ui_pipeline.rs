//! Search UI Pipeline Integration Test
//!
//! This test drives the cheatsheet search box end to end:
//! page JSON → DomKeyEvent → KeyEvent → classification → selection → markup
//!
//! ## Pipeline Flow
//!
//! 1. **Settings**: the settings document names the input and the highlight class
//! 2. **Focus**: SearchFocus puts the cursor in the search input
//! 3. **Input Translation**: raw key JSON → KeyEvent (dom_input)
//! 4. **Classification**: KeyEvent → Enter / Escape / direction (search_keys)
//! 5. **Rendering**: result rows → highlighted spans (highlight)

use dom_host::{len, random_int, Host, SeededRandom, SimDocument};
use dom_input::{normalize, parse_key_event, DomKeyEvent};
use highlight::{Escaping, MatchSpan};
use search_keys::{direction, is_enter, is_nav_down, is_nav_up, is_up, NavDirection};
use services_search_focus::{FocusError, FocusEvent, SearchFocus};
use tests_pipelines::{ResultRow, SearchSession, SessionAction};
use ui_settings::{load_settings_safe, UiSettings};

fn key(json: &str) -> input_types::KeyEvent {
    parse_key_event(json).expect("key event should decode")
}

fn sample_rows() -> Vec<ResultRow> {
    vec![
        ResultRow::new("git commit", vec![MatchSpan::new(0, 3)]),
        ResultRow::new("git checkout", vec![MatchSpan::new(0, 3), MatchSpan::new(4, 2)]),
        ResultRow::new("grep -r", vec![MatchSpan::new(0, 1)]),
    ]
}

#[test]
fn test_search_ui_pipeline_end_to_end() {
    // Step 1: Load settings from the page
    let settings = UiSettings::from_json(
        r##"{"version":1,"search_input_id":"#cs-search-input","highlight_class":"hili"}"##,
    )
    .expect("settings should load");

    // Step 2: Focus the search input
    let mut document = SimDocument::new();
    document.add_element("cs-search-input");
    let mut focus = SearchFocus::from_settings(&settings);
    focus.focus_search(&mut document).expect("input should take focus");
    assert!(focus.is_focused(&document));

    // Step 3: Results arrive
    let mut session = SearchSession::new(settings.highlighter());
    session.set_results(sample_rows());
    assert_eq!(session.selected(), 0);

    // Step 4: Navigate with both arrow spellings and Ctrl+P
    assert_eq!(
        session.handle_key(&key(r#"{"type":"keydown","key":"ArrowDown","keyCode":40}"#)),
        SessionAction::Selected(1)
    );
    assert_eq!(
        session.handle_key(&key(r#"{"type":"keydown","key":"Down"}"#)),
        SessionAction::Selected(2)
    );
    assert_eq!(
        session.handle_key(&key(r#"{"type":"keydown","ctrlKey":true,"keyCode":80}"#)),
        SessionAction::Selected(1)
    );

    // Step 5: Render the list with the selected row marked
    let html = session.render();
    assert!(html.contains(
        r#"<li class="selected"><span class="hili">git</span><span> </span><span class="hili">ch</span><span>eckout</span></li>"#
    ));
    assert!(html.starts_with(r#"<li><span class="hili">git</span><span> commit</span></li>"#));

    // Step 6: Enter opens the selection
    assert_eq!(
        session.handle_key(&key(r#"{"which":13}"#)),
        SessionAction::Open(1)
    );
}

#[test]
fn test_selection_wraps_at_both_ends() {
    let mut session = SearchSession::new(UiSettings::new().highlighter());
    session.set_results(sample_rows());

    assert_eq!(
        session.handle_key(&key(r#"{"key":"Up"}"#)),
        SessionAction::Selected(2)
    );
    assert_eq!(
        session.handle_key(&key(r#"{"key":"Down"}"#)),
        SessionAction::Selected(0)
    );
}

#[test]
fn test_empty_result_list_ignores_navigation() {
    let mut session = SearchSession::new(UiSettings::new().highlighter());

    assert_eq!(
        session.handle_key(&key(r#"{"key":"ArrowDown"}"#)),
        SessionAction::Ignore
    );
    assert_eq!(session.handle_key(&key(r#"{"which":13}"#)), SessionAction::Ignore);
    assert_eq!(session.handle_key(&key(r#"{"which":27}"#)), SessionAction::Dismiss);
    assert_eq!(session.render(), "");
}

#[test]
fn test_typing_does_not_move_selection() {
    let mut session = SearchSession::new(UiSettings::new().highlighter());
    session.set_results(sample_rows());

    for json in [
        r#"{"key":"g"}"#,
        r#"{"key":"p","ctrlKey":true}"#,
        r#"{"keyCode":78}"#,
        r#"{"keyCode":40}"#,
        "{}",
    ] {
        assert_eq!(session.handle_key(&key(json)), SessionAction::Ignore);
    }
    assert_eq!(session.selected(), 0);
}

#[test]
fn test_key_classification_properties() {
    assert!(is_nav_up(&key(r#"{"key":"ArrowUp"}"#)));
    assert!(is_nav_up(&key(r#"{"ctrlKey":true,"keyCode":80}"#)));
    assert!(is_nav_down(&key(r#"{"key":"Down"}"#)));
    assert!(is_nav_down(&key(r#"{"ctrlKey":true,"keyCode":78}"#)));
    assert!(is_enter(&key(r#"{"which":13}"#)));
    assert!(is_enter(&key(r#"{"which":13,"key":"a"}"#)));
    assert_eq!(direction(&key("{}")), NavDirection::None);
    assert_eq!(
        direction(&key(r#"{"ctrlKey":true,"which":78,"keyCode":80}"#)),
        NavDirection::Up
    );
    assert_eq!(direction(&key("{}")).step(), 0);
}

#[test]
fn test_bindings_ignore_fields_they_do_not_name() {
    assert!(!is_enter(&key(r#"{"keyCode":13}"#)));
    assert!(!is_up(&key(r#"{"keyCode":38}"#)));
    assert!(!is_nav_up(&key(r#"{"ctrlKey":true,"key":"p"}"#)));
    assert!(is_nav_up(&key(r#"{"ctrlKey":true,"which":112,"keyCode":80}"#)));
}

#[test]
fn test_raw_event_and_json_agree() {
    let raw = DomKeyEvent::legacy(80).with_ctrl();
    let from_raw = normalize(&raw);
    let from_json = key(r#"{"ctrlKey":true,"which":80,"keyCode":80}"#);
    assert_eq!(from_raw, from_json);
}

#[test]
fn test_focus_missing_input_is_reported() {
    let mut document = SimDocument::new();
    let mut focus = SearchFocus::new();

    let result = focus.focus_search(&mut document);
    assert!(matches!(result, Err(FocusError::ElementNotFound { .. })));
    assert!(matches!(focus.audit_trail(), [FocusEvent::Denied { sequence: 0, .. }]));

    // The input shows up later; a retry succeeds
    document.add_element("cs-search-input");
    focus.focus_search(&mut document).expect("retry should focus");
    assert!(matches!(
        focus.audit_trail().last(),
        Some(FocusEvent::Granted { sequence: 1, .. })
    ));
}

#[test]
fn test_focus_through_trait_object() {
    let mut document = SimDocument::new();
    document.add_element("cs-search-input");
    let host: &mut dyn Host = &mut document;

    let mut focus = SearchFocus::new();
    focus.focus_search(host).expect("should focus through dyn Host");
    assert_eq!(document.focus_history().len(), 1);
}

#[test]
fn test_bad_settings_fall_back_to_defaults() {
    let settings = load_settings_safe(br#"{"version":1,"highlight_class":"two words"}"#);
    assert_eq!(settings, UiSettings::new());

    let mut document = SimDocument::new();
    document.add_element("cs-search-input");
    SearchFocus::from_settings(&settings)
        .focus_search(&mut document)
        .expect("default input should focus");
}

#[test]
fn test_verbatim_settings_pass_markup_through() {
    let mut settings = UiSettings::new();
    settings.escaping = Escaping::Verbatim;
    settings.highlight_class = "match".to_string();

    let mut session = SearchSession::new(settings.highlighter());
    session.set_results(vec![ResultRow::new("<kbd>q</kbd> quit", vec![MatchSpan::new(13, 4)])]);

    assert_eq!(
        session.render(),
        r#"<li class="selected"><span><kbd>q</kbd> </span><span class="match">quit</span></li>"#
    );
}

#[test]
fn test_escaped_results_render_safely() {
    let mut session = SearchSession::new(UiSettings::new().highlighter());
    session.set_results(vec![ResultRow::new("a<b", vec![MatchSpan::new(1, 1)])]);

    assert_eq!(
        session.render(),
        r#"<li class="selected"><span>a</span><span class="hili">&lt;</span><span>b</span></li>"#
    );
}

#[test]
fn test_random_tip_index_and_lengths() {
    let tips = ["Ctrl+P moves up", "Ctrl+N moves down", "Enter opens"];
    let mut rng = SeededRandom::new(7);

    for _ in 0..50 {
        let index = random_int(&mut rng, len(Some(&tips[..])) as u32);
        assert!((index as usize) < tips.len());
    }
    assert_eq!(len::<str>(None), 0);
    assert_eq!(len(Some("grep")), 4);
}
