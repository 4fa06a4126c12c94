//! Application state tests
//!
//! Tests for the form state: generation, validation failures, copying,
//! and the displayed strength rating.

use anyhow::Result;
use passgen::clipboard::Clipboard;
use passgen::password::{CharClass, CharClasses, GeneratorOptions, RandomSource, Strength};
use passgen::ui::app::{Control, ModalKind};
use passgen::ui::theme::Theme;
use passgen::ui::App;

/// Clipboard that remembers the last text written to it
#[derive(Default)]
struct MemoryClipboard {
    contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard that always fails, like a headless session without a display
struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn set_text(&mut self, _text: &str) -> Result<()> {
        anyhow::bail!("no display available")
    }
}

/// Helper to create a test app with the given length and classes
fn create_test_app(length: usize, classes: CharClasses) -> App {
    App::new(
        GeneratorOptions { length, classes },
        RandomSource::Os,
        Theme::default_theme().clone(),
    )
}

#[test]
fn test_alphanumeric_twelve() {
    let classes = CharClasses {
        uppercase: true,
        lowercase: true,
        digits: true,
        symbols: false,
    };
    let mut app = create_test_app(12, classes);

    for _ in 0..50 {
        app.generate();
        let password = app.password.clone().expect("password");
        assert_eq!(password.chars().count(), 12);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));

        // Score reflects the classes actually drawn plus the length point
        let strength = app.strength.expect("strength");
        let expected = 1
            + u8::from(password.chars().any(|c| c.is_ascii_uppercase()))
            + u8::from(password.chars().any(|c| c.is_ascii_lowercase()))
            + u8::from(password.chars().any(|c| c.is_ascii_digit()));
        assert_eq!(strength.score(), expected);
        assert!(strength.score() <= 4);
    }
}

#[test]
fn test_four_lowercase_scores_one() {
    let mut classes = CharClasses::none();
    classes.set(CharClass::Lowercase, true);
    let mut app = create_test_app(4, classes);

    app.generate();
    let password = app.password.clone().expect("password");
    assert_eq!(password.len(), 4);
    assert!(password.chars().all(|c| c.is_ascii_lowercase()));

    let strength = app.strength.expect("strength");
    assert_eq!(strength.score(), 1);
    assert_eq!(strength.label(), "Very weak");
    assert_eq!(strength.percent(), 20);
}

#[test]
fn test_every_length_in_range() {
    let mut app = create_test_app(4, CharClasses::all());
    for length in 4..=64 {
        app.length_input = length.to_string();
        app.generate();
        assert_eq!(app.password.as_ref().map(|p| p.chars().count()), Some(length));
    }
}

#[test]
fn test_empty_selection_leaves_state_unchanged() {
    let mut app = create_test_app(16, CharClasses::all());
    app.generate();
    let password = app.password.clone();
    let strength = app.strength;

    for class in CharClass::ALL {
        app.classes.set(class, false);
    }
    app.generate();

    assert_eq!(app.password, password);
    assert_eq!(app.strength, strength);
    let modal = app.modal.clone().expect("dialog");
    assert_eq!(modal.kind, ModalKind::Error);
    assert_eq!(modal.message, "Select at least one character set");
}

#[test]
fn test_empty_selection_before_first_generation() {
    let mut app = create_test_app(12, CharClasses::none());
    app.generate();
    assert!(app.password.is_none());
    assert!(app.strength.is_none());
    assert!(app.modal.is_some());
}

#[test]
fn test_invalid_length_text_shows_generic_error() {
    let mut app = create_test_app(12, CharClasses::all());
    app.length_input.clear();
    app.generate();
    assert!(app.password.is_none());
    let modal = app.modal.clone().expect("dialog");
    assert_eq!(modal.kind, ModalKind::Error);
    assert!(modal.message.contains("must be a number"));
}

#[test]
fn test_copy_matches_displayed_password() {
    let mut app = create_test_app(64, CharClasses::all());
    let mut clipboard = MemoryClipboard::default();

    app.generate();
    app.copy_password(&mut clipboard);

    let password = app.password.clone().expect("password");
    assert_eq!(clipboard.contents.as_deref(), Some(password.as_str()));
    assert_eq!(
        clipboard.contents.map(String::into_bytes),
        Some(password.into_bytes())
    );
    let modal = app.modal.clone().expect("dialog");
    assert_eq!(modal.kind, ModalKind::Info);
    assert_eq!(modal.message, "Password copied to clipboard");
}

#[test]
fn test_copy_before_generation_does_nothing() {
    let mut app = create_test_app(12, CharClasses::all());
    let mut clipboard = MemoryClipboard::default();

    app.focus = Control::Copy;
    app.activate(&mut clipboard);

    assert!(clipboard.contents.is_none());
    assert!(app.modal.is_none());
}

#[test]
fn test_clipboard_failure_is_not_fatal() {
    let mut app = create_test_app(12, CharClasses::all());
    app.generate();
    let password = app.password.clone();

    app.copy_password(&mut BrokenClipboard);

    assert_eq!(app.password, password);
    assert!(!app.should_quit);
    let modal = app.modal.clone().expect("dialog");
    assert_eq!(modal.kind, ModalKind::Error);
    assert!(modal.message.contains("no display available"));
}

#[test]
fn test_displayed_strength_matches_password() {
    let mut app = create_test_app(20, CharClasses::all());
    app.generate();
    let password = app.password.clone().expect("password");
    assert_eq!(app.strength, Some(Strength::evaluate(&password)));
}
