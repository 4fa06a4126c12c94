//! # UI Module
//!
//! The terminal user interface for passgen.
//!
//! ## Components
//!
//! - [`App`] - form state: length field, character classes, current password,
//!   focus, open dialog
//! - [`mod@input`] - key handling
//! - [`mod@render`] - drawing the form
//! - [`mod@config`] - persisted preferences
//! - [`mod@theme`] - color themes
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                    Header                       │
//! ├─ Settings ──────────────────────────────────────┤
//! │  Password length: [12]                          │
//! │  [x] A-Z  [x] a-z  [x] 0-9  [x] !@#             │
//! ├─────────────────────────────────────────────────┤
//! │                  [ Generate ]                   │
//! ├─ Password ─────────────────────────┬────────────┤
//! │  Xk4!p...                          │   Copy     │
//! ├─ Strength ─────────────────────────┴────────────┤
//! │  ██████████████ Strength: Excellent             │
//! ├─────────────────────────────────────────────────┤
//! │                    Footer                       │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod config;
pub mod input;
pub mod render;
pub mod theme;

pub use app::App;
pub use input::{handle_key, KeyOutcome};
pub use render::render;
