//! Five-point strength heuristic.
//!
//! One point each for: at least 12 characters, an uppercase letter, a
//! lowercase letter, a digit, and a symbol from [`SYMBOLS`].

use crate::password::charset::SYMBOLS;

/// Minimum length that earns the length point.
pub const STRONG_LENGTH: usize = 12;

/// Highest reachable score.
pub const MAX_SCORE: u8 = 5;

/// Labels from weakest to strongest. Score `n` (1..=5) maps to `LABELS[n - 1]`;
/// score 0 maps to the weakest label.
pub const LABELS: [&str; 5] = ["Very weak", "Medium", "Good", "Very good", "Excellent"];

/// Strength rating of a single password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Strength {
    score: u8,
}

impl Strength {
    pub fn evaluate(password: &str) -> Self {
        let checks = [
            password.chars().count() >= STRONG_LENGTH,
            password.chars().any(char::is_uppercase),
            password.chars().any(char::is_lowercase),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| SYMBOLS.contains(c)),
        ];
        let score = checks.iter().filter(|passed| **passed).count() as u8;
        Self { score }
    }

    /// Number of satisfied checks, 0..=5.
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Gauge fill, 0..=100.
    pub fn percent(&self) -> u16 {
        u16::from(self.score) * 100 / u16::from(MAX_SCORE)
    }

    pub fn label(&self) -> &'static str {
        let index = usize::from(self.score.max(1) - 1);
        LABELS[index.min(LABELS.len() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_checks_pass() {
        let strength = Strength::evaluate("Abcdefgh1234!");
        assert_eq!(strength.score(), 5);
        assert_eq!(strength.label(), "Excellent");
        assert_eq!(strength.percent(), 100);
    }

    #[test]
    fn test_short_lowercase() {
        let strength = Strength::evaluate("abcd");
        assert_eq!(strength.score(), 1);
        assert_eq!(strength.label(), "Very weak");
        assert_eq!(strength.percent(), 20);
    }

    #[test]
    fn test_zero_score_maps_to_weakest_label() {
        // Only reachable with input the generator never produces.
        let strength = Strength::evaluate("    ");
        assert_eq!(strength.score(), 0);
        assert_eq!(strength.label(), "Very weak");
        assert_eq!(strength.percent(), 0);

        assert_eq!(Strength::evaluate("").score(), 0);
    }

    #[test]
    fn test_long_alphanumeric_without_symbols() {
        let strength = Strength::evaluate("Abc123Abc123");
        assert_eq!(strength.score(), 4);
        assert_eq!(strength.label(), "Very good");
    }

    #[test]
    fn test_each_label_reachable() {
        let cases = [
            ("abcd", "Very weak"),
            ("abc1", "Medium"),
            ("aB1x", "Good"),
            ("aB1!", "Very good"),
            ("aB1!aB1!aB1!", "Excellent"),
        ];
        for (password, label) in cases {
            assert_eq!(Strength::evaluate(password).label(), label, "{password}");
        }
    }

    #[test]
    fn test_length_counts_characters() {
        // Eleven characters plus a digit: length point not earned.
        assert_eq!(Strength::evaluate("abcdefghij1").score(), 2);
        assert_eq!(Strength::evaluate("abcdefghijk1").score(), 3);
    }

    #[test]
    fn test_symbols_outside_set_do_not_count() {
        assert_eq!(Strength::evaluate("abc?").score(), 1);
        assert_eq!(Strength::evaluate("abc=").score(), 2);
    }

    #[test]
    fn test_ordering_follows_score() {
        assert!(Strength::evaluate("abcd") < Strength::evaluate("aB1!aB1!aB1!"));
    }
}
