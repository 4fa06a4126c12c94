//! Character classes and the pools they contribute to generation.

use serde::{Deserialize, Serialize};

/// Uppercase ASCII letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase ASCII letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// ASCII digits.
pub const DIGITS: &str = "0123456789";
/// Symbols offered by the symbol class. The strength heuristic checks
/// against the same set.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=";

/// One of the four user-selectable character categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharClass {
    /// All classes in display (and pool) order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn pool(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    /// Short caption shown next to the checkbox.
    pub fn caption(self) -> &'static str {
        match self {
            CharClass::Uppercase => "A-Z",
            CharClass::Lowercase => "a-z",
            CharClass::Digits => "0-9",
            CharClass::Symbols => "!@#",
        }
    }
}

/// The set of enabled character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CharClasses {
    #[serde(default = "enabled")]
    pub uppercase: bool,
    #[serde(default = "enabled")]
    pub lowercase: bool,
    #[serde(default = "enabled")]
    pub digits: bool,
    #[serde(default = "enabled")]
    pub symbols: bool,
}

fn enabled() -> bool {
    true
}

impl Default for CharClasses {
    fn default() -> Self {
        Self::all()
    }
}

impl CharClasses {
    pub fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }

    pub fn none() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
        }
    }

    pub fn contains(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Digits => self.digits,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        let flag = match class {
            CharClass::Uppercase => &mut self.uppercase,
            CharClass::Lowercase => &mut self.lowercase,
            CharClass::Digits => &mut self.digits,
            CharClass::Symbols => &mut self.symbols,
        };
        *flag = enabled;
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.set(class, !self.contains(class));
    }

    /// True when no class is selected, i.e. the pool would be empty.
    pub fn is_empty(&self) -> bool {
        !CharClass::ALL.iter().any(|c| self.contains(*c))
    }

    /// Union of the selected pools, in class order.
    pub fn pool(&self) -> Vec<char> {
        CharClass::ALL
            .iter()
            .filter(|c| self.contains(**c))
            .flat_map(|c| c.pool().chars())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_sizes() {
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 14);
        assert_eq!(CharClasses::all().pool().len(), 76);
    }

    #[test]
    fn test_pool_follows_selection() {
        let classes = CharClasses {
            uppercase: false,
            lowercase: true,
            digits: true,
            symbols: false,
        };
        let pool: String = classes.pool().into_iter().collect();
        assert_eq!(pool, format!("{}{}", LOWERCASE, DIGITS));
    }

    #[test]
    fn test_none_is_empty() {
        let classes = CharClasses::none();
        assert!(classes.is_empty());
        assert!(classes.pool().is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut classes = CharClasses::all();
        classes.toggle(CharClass::Symbols);
        assert!(!classes.contains(CharClass::Symbols));
        assert!(!classes.is_empty());
        classes.toggle(CharClass::Symbols);
        assert!(classes.contains(CharClass::Symbols));
    }

    #[test]
    fn test_deserialize_missing_fields_default_to_enabled() {
        let classes: CharClasses = serde_json::from_str(r#"{"symbols": false}"#).expect("parse");
        assert!(classes.uppercase);
        assert!(classes.lowercase);
        assert!(classes.digits);
        assert!(!classes.symbols);
    }
}
