//! UI rendering tests
//!
//! Renders full frames into a TestBackend and asserts on the visible text
//! for each lookup state, plus palette contrast for both theme modes.

use ratatui::{backend::TestBackend, Terminal};

use lexitui::app::{App, InputMode, LookupStatus, NOT_FOUND_MESSAGE};
use lexitui::models::{Meaning, ThemeMode, WordEntry};
use lexitui::ui::theme::{color_to_rgb, meets_wcag_aa, Palette};
use lexitui::ui::view;

// =============================================================================
// Helpers
// =============================================================================

fn render_to_text(app: &App) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| view::render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
        }
        text.push('\n');
    }
    text
}

fn hello_entry() -> WordEntry {
    WordEntry {
        word: "hello".into(),
        phonetic: Some("/həˈləʊ/".into()),
        meanings: vec![Meaning {
            part_of_speech: "exclamation".into(),
            definition: "used as a greeting".into(),
            example: None,
        }],
        audio_url: None,
    }
}

// =============================================================================
// State Rendering
// =============================================================================

#[test]
fn test_idle_renders_hint_only() {
    let app = App::new(ThemeMode::Light);
    let text = render_to_text(&app);

    assert!(text.contains("Definitions appear here"));
    assert!(!text.contains("DEFINITION"));
    assert!(!text.contains(NOT_FOUND_MESSAGE));
}

#[test]
fn test_loading_renders_indicator() {
    let mut app = App::new(ThemeMode::Light);
    app.activate_key("hello");
    let text = render_to_text(&app);

    assert!(text.contains("Looking up"));
    assert!(!text.contains("DEFINITION"));
}

#[test]
fn test_error_renders_fixed_message_and_no_card() {
    let mut app = App::new(ThemeMode::Light);
    app.status = LookupStatus::Failed(NOT_FOUND_MESSAGE.into());
    let text = render_to_text(&app);

    assert!(text.contains("Word not found."));
    assert!(!text.contains("DEFINITION"));
}

#[test]
fn test_success_renders_card() {
    let mut app = App::new(ThemeMode::Light);
    app.status = LookupStatus::Ready(hello_entry());
    let text = render_to_text(&app);

    assert!(text.contains("DEFINITION"));
    assert!(text.contains("hello"));
    assert!(text.contains("/həˈləʊ/"));
    assert!(text.contains("exclamation: used as a greeting"));
}

#[test]
fn test_success_without_audio_shows_distinct_message() {
    let mut app = App::new(ThemeMode::Light);
    app.status = LookupStatus::Ready(hello_entry());
    let text = render_to_text(&app);

    // The no-audio case says so, instead of promising audio that will
    // never arrive.
    assert!(text.contains("No audio available"));
    assert!(!text.contains("Loading audio"));
}

#[test]
fn test_success_with_audio_shows_play_hint() {
    let mut app = App::new(ThemeMode::Light);
    let mut entry = hello_entry();
    entry.audio_url = Some("https://example.com/hello.mp3".into());
    app.status = LookupStatus::Ready(entry);
    let text = render_to_text(&app);

    assert!(text.contains("Pronunciation available"));
    assert!(text.contains("p:play"));
    assert!(!text.contains("No audio available"));
}

#[test]
fn test_meaning_example_rendered_when_present() {
    let mut app = App::new(ThemeMode::Light);
    let mut entry = hello_entry();
    entry.meanings[0].example = Some("hello there, Katie!".into());
    app.status = LookupStatus::Ready(entry);
    let text = render_to_text(&app);

    assert!(text.contains("hello there, Katie!"));
}

// =============================================================================
// Validation Message
// =============================================================================

#[test]
fn test_validation_message_after_clearing_input() {
    let mut app = App::new(ThemeMode::Light);
    app.query.insert('a');
    app.query.backspace();
    let text = render_to_text(&app);

    assert!(text.contains("Please enter a word"));
}

#[test]
fn test_no_validation_message_before_editing() {
    let app = App::new(ThemeMode::Light);
    let text = render_to_text(&app);

    assert!(!text.contains("Please enter a word"));
}

#[test]
fn test_query_text_visible_in_search_box() {
    let mut app = App::new(ThemeMode::Light);
    for c in "greet".chars() {
        app.query.insert(c);
    }
    let text = render_to_text(&app);

    assert!(text.contains("greet"));
}

// =============================================================================
// Theme
// =============================================================================

#[test]
fn test_theme_changes_background() {
    let light = App::new(ThemeMode::Light);
    let dark = App::new(ThemeMode::Dark);

    let bg_of = |app: &App| {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| view::render(frame, app)).unwrap();
        terminal.backend().buffer().cell((0, 0)).unwrap().style().bg
    };

    assert_ne!(bg_of(&light), bg_of(&dark));
    assert_eq!(bg_of(&light), Some(Palette::light().background));
    assert_eq!(bg_of(&dark), Some(Palette::dark().background));
}

#[test]
fn test_status_bar_reflects_mode_and_theme() {
    let mut app = App::new(ThemeMode::Dark);
    app.input_mode = InputMode::Normal;
    let text = render_to_text(&app);

    assert!(text.contains("NORMAL"));
    assert!(text.contains("dark"));
    assert!(text.contains("t:theme"));
}

#[test]
fn test_palettes_meet_contrast_requirements() {
    for pal in [Palette::light(), Palette::dark()] {
        let text = color_to_rgb(pal.text).unwrap();
        let bg = color_to_rgb(pal.background).unwrap();
        assert!(meets_wcag_aa(text, bg));
    }
}
