//! # Password Module
//!
//! The computational part of passgen, independent of the terminal UI.
//!
//! - [`charset`] - the four character classes and their pools
//! - [`generator`] - uniform random generation with validation
//! - [`strength`] - the five-point strength heuristic

pub mod charset;
pub mod generator;
pub mod strength;

pub use charset::{CharClass, CharClasses, SYMBOLS};
pub use generator::{
    clamp_length, generate, generate_with, parse_length, GenerateError, GeneratorOptions,
    RandomSource, DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH,
};
pub use strength::Strength;
