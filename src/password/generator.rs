//! # Password Generation
//!
//! Draws characters independently and uniformly, with replacement, from the
//! union of the selected character pools.
//!
//! The random source is an explicit setting ([`RandomSource`]). Both choices
//! are cryptographically secure generators; [`generate_with`] accepts any
//! [`rand::Rng`] so callers (and tests) can supply their own.

use crate::password::charset::CharClasses;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 4;
/// Longest password the generator will produce.
pub const MAX_LENGTH: usize = 64;
/// Length used when nothing else is configured.
pub const DEFAULT_LENGTH: usize = 12;

/// Errors raised while generating a password.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// No character class is selected, so the pool is empty.
    #[error("Select at least one character set")]
    NoCharacterClass,

    /// The requested length is outside the supported range.
    #[error(
        "Password length must be between {} and {}, got {length}",
        MIN_LENGTH,
        MAX_LENGTH
    )]
    LengthOutOfRange { length: usize },

    /// The length field does not hold a number.
    #[error("Password length must be a number, got {0:?}")]
    InvalidLength(String),
}

/// Where random draws come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RandomSource {
    /// The operating system CSPRNG, queried on every draw.
    #[default]
    Os,
    /// The thread-local userspace CSPRNG, periodically reseeded from the OS.
    Thread,
}

impl fmt::Display for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomSource::Os => write!(f, "os"),
            RandomSource::Thread => write!(f, "thread"),
        }
    }
}

impl FromStr for RandomSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "os" => Ok(RandomSource::Os),
            "thread" => Ok(RandomSource::Thread),
            other => Err(format!("unknown random source: {other} (expected os or thread)")),
        }
    }
}

/// Everything the generator needs to know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub length: usize,
    pub classes: CharClasses,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: CharClasses::default(),
        }
    }
}

/// Clamp a length into `[MIN_LENGTH, MAX_LENGTH]`.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Parse the text of the length field.
pub fn parse_length(text: &str) -> Result<usize, GenerateError> {
    let trimmed = text.trim();
    let length: usize = trimmed
        .parse()
        .map_err(|_| GenerateError::InvalidLength(trimmed.to_string()))?;
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(GenerateError::LengthOutOfRange { length });
    }
    Ok(length)
}

/// Generate a password using the configured random source.
pub fn generate(options: &GeneratorOptions, source: RandomSource) -> Result<String, GenerateError> {
    match source {
        RandomSource::Os => generate_with(options, &mut rand::rngs::OsRng),
        RandomSource::Thread => generate_with(options, &mut rand::thread_rng()),
    }
}

/// Generate a password drawing from `rng`.
pub fn generate_with<R: Rng + ?Sized>(
    options: &GeneratorOptions,
    rng: &mut R,
) -> Result<String, GenerateError> {
    let pool = options.classes.pool();
    if pool.is_empty() {
        return Err(GenerateError::NoCharacterClass);
    }
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&options.length) {
        return Err(GenerateError::LengthOutOfRange {
            length: options.length,
        });
    }

    let password: String = (0..options.length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect();
    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::charset::{CharClass, DIGITS, LOWERCASE, UPPERCASE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn options(length: usize, classes: CharClasses) -> GeneratorOptions {
        GeneratorOptions { length, classes }
    }

    #[test]
    fn test_length_matches_request() {
        let mut rng = StdRng::seed_from_u64(7);
        for length in MIN_LENGTH..=MAX_LENGTH {
            let password =
                generate_with(&options(length, CharClasses::all()), &mut rng).expect("generate");
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn test_characters_come_from_selected_pools() {
        let mut rng = StdRng::seed_from_u64(42);
        let classes = CharClasses {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: false,
        };
        let allowed: HashSet<char> = format!("{}{}{}", UPPERCASE, LOWERCASE, DIGITS)
            .chars()
            .collect();
        for _ in 0..200 {
            let password = generate_with(&options(12, classes), &mut rng).expect("generate");
            assert!(password.chars().all(|c| allowed.contains(&c)), "{password}");
        }
    }

    #[test]
    fn test_single_class() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut classes = CharClasses::none();
        classes.set(CharClass::Lowercase, true);
        let password = generate_with(&options(4, classes), &mut rng).expect("generate");
        assert_eq!(password.len(), 4);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_empty_selection_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = generate_with(&options(12, CharClasses::none()), &mut rng);
        assert_eq!(result, Err(GenerateError::NoCharacterClass));
    }

    #[test]
    fn test_length_out_of_range_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_with(&options(3, CharClasses::all()), &mut rng),
            Err(GenerateError::LengthOutOfRange { length: 3 })
        );
        assert_eq!(
            generate_with(&options(65, CharClasses::all()), &mut rng),
            Err(GenerateError::LengthOutOfRange { length: 65 })
        );
    }

    #[test]
    fn test_empty_selection_reported_before_length() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = generate_with(&options(0, CharClasses::none()), &mut rng);
        assert_eq!(result, Err(GenerateError::NoCharacterClass));
    }

    #[test]
    fn test_draws_cover_whole_pool() {
        // 10 digits over 2000 draws: every digit should show up.
        let mut rng = StdRng::seed_from_u64(99);
        let mut classes = CharClasses::none();
        classes.set(CharClass::Digits, true);
        let mut seen = HashSet::new();
        for _ in 0..50 {
            let password = generate_with(&options(40, classes), &mut rng).expect("generate");
            seen.extend(password.chars());
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_generate_with_each_source() {
        for source in [RandomSource::Os, RandomSource::Thread] {
            let password = generate(&GeneratorOptions::default(), source).expect("generate");
            assert_eq!(password.len(), DEFAULT_LENGTH);
        }
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("12"), Ok(12));
        assert_eq!(parse_length(" 64 "), Ok(64));
        assert_eq!(
            parse_length("3"),
            Err(GenerateError::LengthOutOfRange { length: 3 })
        );
        assert_eq!(
            parse_length(""),
            Err(GenerateError::InvalidLength(String::new()))
        );
        assert_eq!(
            parse_length("1x"),
            Err(GenerateError::InvalidLength("1x".to_string()))
        );
    }

    #[test]
    fn test_clamp_length() {
        assert_eq!(clamp_length(0), MIN_LENGTH);
        assert_eq!(clamp_length(20), 20);
        assert_eq!(clamp_length(1000), MAX_LENGTH);
    }

    #[test]
    fn test_random_source_from_str() {
        assert_eq!("os".parse::<RandomSource>(), Ok(RandomSource::Os));
        assert_eq!("Thread".parse::<RandomSource>(), Ok(RandomSource::Thread));
        assert!("lcg".parse::<RandomSource>().is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GenerateError::NoCharacterClass.to_string(),
            "Select at least one character set"
        );
        assert_eq!(
            GenerateError::LengthOutOfRange { length: 99 }.to_string(),
            "Password length must be between 4 and 64, got 99"
        );
    }
}
