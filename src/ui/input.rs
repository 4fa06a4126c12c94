//! Keyboard handling.
//!
//! Maps a key press onto [`App`] state changes. Everything happens inline:
//! generation, scoring and clipboard writes complete before the next event
//! is read.

use crate::clipboard::Clipboard;
use crate::ui::app::{App, Control};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Side effects the caller has to carry out after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
    /// The theme changed; the new name should be persisted.
    ThemeChanged(&'static str),
}

pub fn handle_key(app: &mut App, key: KeyEvent, clipboard: &mut dyn Clipboard) -> KeyOutcome {
    // Windows reports releases as well as presses
    if key.kind != KeyEventKind::Press {
        return KeyOutcome::Ignored;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return KeyOutcome::Handled;
    }

    // A dialog swallows everything until dismissed
    if app.modal.is_some() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                app.dismiss_modal();
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        };
    }

    app.status = None;

    if app.focus == Control::Length {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                app.length_push_digit(c);
                return KeyOutcome::Handled;
            }
            KeyCode::Backspace => {
                app.length_pop_char();
                return KeyOutcome::Handled;
            }
            KeyCode::Left | KeyCode::Char('-') => {
                app.adjust_length(-1);
                return KeyOutcome::Handled;
            }
            KeyCode::Right | KeyCode::Char('+') => {
                app.adjust_length(1);
                return KeyOutcome::Handled;
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
        }
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
            app.next_control();
        }
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
            app.previous_control();
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate(clipboard);
        }
        KeyCode::Char('g') => {
            app.generate();
        }
        KeyCode::Char('c') => {
            app.copy_password(clipboard);
        }
        KeyCode::Char('t') => {
            return KeyOutcome::ThemeChanged(app.cycle_theme());
        }
        _ => return KeyOutcome::Ignored,
    }

    KeyOutcome::Handled
}
