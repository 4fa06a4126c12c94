//! # Clipboard Backends
//!
//! Copying the current password goes through the [`Clipboard`] trait so the
//! UI does not care where the text ends up.
//!
//! - [`SystemClipboard`] - the native platform clipboard (via `arboard`)
//! - [`Osc52Clipboard`] - asks the terminal emulator to set the clipboard
//!   with an OSC 52 escape sequence; useful over SSH where no native
//!   clipboard is reachable
//!
//! Text is written verbatim: no trimming, no newline, no re-encoding.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// Something that can receive copied text.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Which backend to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardKind {
    #[default]
    System,
    Osc52,
}

impl fmt::Display for ClipboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardKind::System => write!(f, "system"),
            ClipboardKind::Osc52 => write!(f, "osc52"),
        }
    }
}

impl FromStr for ClipboardKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "system" => Ok(ClipboardKind::System),
            "osc52" => Ok(ClipboardKind::Osc52),
            other => Err(format!(
                "unknown clipboard backend: {other} (expected system or osc52)"
            )),
        }
    }
}

/// Build the backend selected by `kind`.
pub fn from_kind(kind: ClipboardKind) -> Box<dyn Clipboard> {
    match kind {
        ClipboardKind::System => Box::new(SystemClipboard::new()),
        ClipboardKind::Osc52 => Box::new(Osc52Clipboard::new(io::stdout())),
    }
}

/// Native system clipboard.
///
/// The `arboard` handle is opened on first use and then kept for the rest
/// of the session. On X11 the owning process serves the selection, so
/// dropping the handle right after copying would lose the contents.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().context("Failed to open the system clipboard")?;
            self.inner = Some(clipboard);
        }
        if let Some(clipboard) = self.inner.as_mut() {
            clipboard
                .set_text(text)
                .context("Failed to write to the system clipboard")?;
        }
        Ok(())
    }
}

/// Clipboard backed by the terminal's OSC 52 support.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Escape sequence that sets the clipboard selection to `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(osc52_sequence(text).as_bytes())
            .context("Failed to write OSC 52 sequence")?;
        self.out.flush().context("Failed to flush terminal output")?;
        Ok(())
    }
}
