//! # Theme System
//!
//! Color themes for the passgen TUI.
//!
//! Rendering code never hardcodes `ratatui::style::Color` values; it reads
//! them from the active [`Theme`]. Press `t` to cycle themes at runtime; the
//! choice is written back to the config file.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default)
//! - **Catppuccin Macchiato**
//! - **Catppuccin Frappe**
//! - **Dracula**
//! - **Nord**
//! - **Gruvbox Dark**

use ratatui::style::Color;

/// All colors used by the passgen TUI, grouped by semantic role.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Human-readable name, also the value stored in the config file.
    pub name: &'static str,

    /// Background for panels and dialogs.
    pub bg: Color,
    /// Primary text.
    pub fg: Color,
    /// Hints, disabled controls, unchecked boxes.
    pub fg_dim: Color,

    /// Focused control border and header.
    pub accent: Color,
    /// The generated password.
    pub secondary: Color,

    /// Strong passwords, confirmations.
    pub success: Color,
    /// Middling passwords.
    pub warning: Color,
    /// Weak passwords, error dialogs.
    pub error: Color,
}

impl Theme {
    /// Return the list of all built-in themes (order = cycling order).
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Catppuccin Mocha).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme after this one, wrapping around.
    pub fn next(&self) -> &'static Theme {
        let index = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name == self.name)
            .map_or(0, |i| (i + 1) % BUILT_IN_THEMES.len());
        &BUILT_IN_THEMES[index]
    }

    /// Gauge and label color for a strength score (0..=5).
    pub fn strength_color(&self, score: u8) -> Color {
        match score {
            0..=2 => self.error,
            3 => self.warning,
            _ => self.success,
        }
    }
}

static BUILT_IN_THEMES: [Theme; 6] = [
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),           // base
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        accent: Color::Rgb(137, 180, 250),    // blue
        secondary: Color::Rgb(249, 226, 175), // yellow
        success: Color::Rgb(166, 227, 161),   // green
        warning: Color::Rgb(250, 179, 135),   // peach
        error: Color::Rgb(243, 139, 168),     // red
    },
    Theme {
        name: "Catppuccin Macchiato",
        bg: Color::Rgb(36, 39, 58),
        fg: Color::Rgb(202, 211, 245),
        fg_dim: Color::Rgb(110, 115, 141),
        accent: Color::Rgb(138, 173, 244),
        secondary: Color::Rgb(238, 212, 159),
        success: Color::Rgb(166, 218, 149),
        warning: Color::Rgb(245, 169, 127),
        error: Color::Rgb(237, 135, 150),
    },
    Theme {
        name: "Catppuccin Frappe",
        bg: Color::Rgb(48, 52, 70),
        fg: Color::Rgb(198, 208, 245),
        fg_dim: Color::Rgb(115, 121, 148),
        accent: Color::Rgb(140, 170, 238),
        secondary: Color::Rgb(229, 200, 144),
        success: Color::Rgb(166, 209, 137),
        warning: Color::Rgb(239, 159, 118),
        error: Color::Rgb(231, 130, 132),
    },
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(189, 147, 249),    // purple
        secondary: Color::Rgb(241, 250, 140), // yellow
        success: Color::Rgb(80, 250, 123),
        warning: Color::Rgb(255, 184, 108),
        error: Color::Rgb(255, 85, 85),
    },
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),
        secondary: Color::Rgb(235, 203, 139),
        success: Color::Rgb(163, 190, 140),
        warning: Color::Rgb(208, 135, 112),
        error: Color::Rgb(191, 97, 106),
    },
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),
        secondary: Color::Rgb(250, 189, 47),
        success: Color::Rgb(184, 187, 38),
        warning: Color::Rgb(254, 128, 25),
        error: Color::Rgb(251, 73, 52),
    },
];
