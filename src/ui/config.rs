//! # Configuration Persistence
//!
//! Manages user preferences stored in `~/.config/passgen/config.json`.
//!
//! ## Overview
//!
//! The [`Config`] struct is serialized to / deserialized from a JSON file in
//! the user's XDG config directory. It holds the startup state of the form
//! (length and character classes), the selected theme, and the clipboard and
//! random-source choices. Generated passwords are never stored.
//!
//! ## File Location
//!
//! ```text
//! ~/.config/passgen/config.json
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.

use crate::clipboard::ClipboardKind;
use crate::password::{clamp_length, CharClasses, RandomSource, DEFAULT_LENGTH};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted user configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The name of the selected theme (must match a built-in theme name).
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Initial password length; clamped into the supported range on load.
    #[serde(default = "default_length")]
    pub length: usize,

    /// Character classes enabled at startup.
    #[serde(default)]
    pub classes: CharClasses,

    #[serde(default)]
    pub clipboard: ClipboardKind,

    #[serde(default)]
    pub random: RandomSource,
}

fn default_theme_name() -> String {
    "Catppuccin Mocha".to_string()
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            length: default_length(),
            classes: CharClasses::default(),
            clipboard: ClipboardKind::default(),
            random: RandomSource::default(),
        }
    }
}

impl Config {
    /// Load configuration from disk. Returns `Config::default()` if the file
    /// does not exist or cannot be parsed.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default configuration: {:#}", e);
                Self::default()
            }
        }
    }

    /// Try to load configuration, returning an error on failure.
    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.length = clamp_length(config.length);
        Ok(config)
    }

    /// Save the current configuration to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save the current configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Return the path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "passgen")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}
