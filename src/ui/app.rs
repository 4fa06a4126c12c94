use crate::clipboard::Clipboard;
use crate::password::{
    self, clamp_length, parse_length, CharClass, CharClasses, GenerateError, GeneratorOptions,
    RandomSource, Strength, MAX_LENGTH,
};
use crate::ui::theme::Theme;

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Length,
    Class(CharClass),
    Generate,
    Copy,
}

impl Control {
    pub const ORDER: [Control; 7] = [
        Control::Length,
        Control::Class(CharClass::Uppercase),
        Control::Class(CharClass::Lowercase),
        Control::Class(CharClass::Digits),
        Control::Class(CharClass::Symbols),
        Control::Generate,
        Control::Copy,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|c| *c == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Info,
    Error,
}

/// A dialog that blocks other input until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub kind: ModalKind,
    pub title: String,
    pub message: String,
}

impl Modal {
    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Self {
            kind: ModalKind::Info,
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn error(title: &str, message: impl Into<String>) -> Self {
        Self {
            kind: ModalKind::Error,
            title: title.to_string(),
            message: message.into(),
        }
    }
}

pub struct App {
    /// Text of the length field; parsed on generate.
    pub length_input: String,
    /// Set when focus arrives on the length field: the next digit typed
    /// replaces the field instead of appending to it.
    pub length_replace: bool,
    pub classes: CharClasses,
    pub random: RandomSource,
    pub password: Option<String>,
    pub strength: Option<Strength>,
    pub focus: Control,
    pub modal: Option<Modal>,
    /// One-line notice shown in the footer until the next key press.
    pub status: Option<String>,
    pub theme: Theme,
    pub should_quit: bool,
}

impl App {
    pub fn new(options: GeneratorOptions, random: RandomSource, theme: Theme) -> Self {
        Self {
            length_input: clamp_length(options.length).to_string(),
            length_replace: false,
            classes: options.classes,
            random,
            password: None,
            strength: None,
            focus: Control::Generate,
            modal: None,
            status: None,
            theme,
            should_quit: false,
        }
    }

    pub fn next_control(&mut self) {
        let i = self.focus.position();
        self.focus = Control::ORDER[(i + 1) % Control::ORDER.len()];
        self.length_replace = self.focus == Control::Length;
    }

    pub fn previous_control(&mut self) {
        let i = self.focus.position();
        self.focus = Control::ORDER[(i + Control::ORDER.len() - 1) % Control::ORDER.len()];
        self.length_replace = self.focus == Control::Length;
    }

    /// The length currently in the field, if it parses and is in range.
    pub fn length(&self) -> Option<usize> {
        parse_length(&self.length_input).ok()
    }

    /// Step the length by `delta`, clamped to the supported range. An
    /// unparseable field restarts from the nearest bound.
    pub fn adjust_length(&mut self, delta: isize) {
        let current = self
            .length_input
            .trim()
            .parse::<usize>()
            .unwrap_or(if delta < 0 { MAX_LENGTH } else { 0 });
        let stepped = current.saturating_add_signed(delta);
        self.length_input = clamp_length(stepped).to_string();
        self.length_replace = false;
    }

    /// Type a digit into the length field. The first digit after focusing
    /// the field, or any digit once it already holds two, starts a new value.
    pub fn length_push_digit(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        if self.length_replace || self.length_input.len() >= 2 {
            self.length_input.clear();
        }
        self.length_input.push(c);
        self.length_replace = false;
    }

    pub fn length_pop_char(&mut self) {
        self.length_input.pop();
        self.length_replace = false;
    }

    pub fn toggle_class(&mut self, class: CharClass) {
        self.classes.toggle(class);
    }

    pub fn options(&self) -> Result<GeneratorOptions, GenerateError> {
        Ok(GeneratorOptions {
            length: parse_length(&self.length_input)?,
            classes: self.classes,
        })
    }

    /// Generate a new password and rate it. On failure a dialog is opened and
    /// the previous password and rating are left untouched.
    pub fn generate(&mut self) {
        if self.classes.is_empty() {
            tracing::debug!("Generation refused: no character class selected");
            self.modal = Some(Modal::error(
                "Error",
                GenerateError::NoCharacterClass.to_string(),
            ));
            return;
        }

        let result = self
            .options()
            .and_then(|options| password::generate(&options, self.random));

        match result {
            Ok(password) => {
                let strength = Strength::evaluate(&password);
                tracing::info!(
                    length = password.chars().count(),
                    score = strength.score(),
                    "Generated password"
                );
                self.password = Some(password);
                self.strength = Some(strength);
            }
            Err(e) => {
                tracing::warn!("Generation failed: {}", e);
                self.modal = Some(Modal::error("Error", e.to_string()));
            }
        }
    }

    /// Copy the current password to `clipboard`.
    pub fn copy_password(&mut self, clipboard: &mut dyn Clipboard) {
        let Some(password) = self.password.as_deref() else {
            self.status = Some("Nothing to copy yet, generate a password first".to_string());
            return;
        };

        match clipboard.set_text(password) {
            Ok(()) => {
                tracing::info!("Copied password to clipboard");
                self.modal = Some(Modal::info("Success", "Password copied to clipboard"));
            }
            Err(e) => {
                tracing::warn!("Clipboard write failed: {:#}", e);
                self.modal = Some(Modal::error("Clipboard", format!("{:#}", e)));
            }
        }
    }

    pub fn can_copy(&self) -> bool {
        self.password.is_some()
    }

    /// Run the action behind the focused control.
    pub fn activate(&mut self, clipboard: &mut dyn Clipboard) {
        match self.focus {
            Control::Length => {}
            Control::Class(class) => self.toggle_class(class),
            Control::Generate => self.generate(),
            Control::Copy => self.copy_password(clipboard),
        }
    }

    pub fn dismiss_modal(&mut self) {
        self.modal = None;
    }

    /// Switch to the next built-in theme and return its name.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme.next();
        self.theme = next.clone();
        next.name
    }
}
