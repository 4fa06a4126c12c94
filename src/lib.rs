//! passgen - a terminal UI for generating random passwords
//!
//! This library provides password generation from selectable character
//! classes, a five-point strength heuristic, clipboard backends, and the
//! interactive form that ties them together.

pub mod clipboard;
pub mod logging;
pub mod password;
pub mod ui;
