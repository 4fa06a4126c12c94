//! # passgen Entry Point
//!
//! Full-screen terminal form for generating random passwords.
//!
//! ## Usage
//!
//! ```bash
//! # Start with saved preferences
//! passgen
//!
//! # Start with a 20 character length and the Nord theme
//! passgen --length 20 --theme nord
//!
//! # Copy through the terminal (OSC 52), e.g. over SSH
//! passgen --clipboard osc52
//! ```
//!
//! ## Key Bindings
//!
//! - `Tab` / `↓` / `j` - Next control
//! - `Shift+Tab` / `↑` / `k` - Previous control
//! - `Space` / `Enter` - Toggle checkbox or press the focused button
//! - `←` `→` / `-` `+` / digits - Edit the length field (when focused)
//! - `g` - Generate a password
//! - `c` - Copy the password to the clipboard
//! - `t` - Cycle color theme
//! - `q` / `Ctrl+c` - Quit
//!
//! Dialogs are closed with `Enter`, `Space` or `Esc`.

use passgen::clipboard::{self, Clipboard, ClipboardKind};
use passgen::logging;
use passgen::password::{GeneratorOptions, RandomSource};
use passgen::ui::{self, config::Config, theme::Theme, App, KeyOutcome};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// passgen - generate random passwords with a strength meter
#[derive(Parser, Debug)]
#[command(name = "passgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate random passwords from selectable character sets", long_about = None)]
struct Args {
    /// Initial password length (4-64)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(4..=64))]
    length: Option<u16>,

    /// Color theme name, e.g. "Nord" or "Catppuccin Mocha"
    #[arg(short, long)]
    theme: Option<String>,

    /// Clipboard backend: system or osc52
    #[arg(long, value_name = "BACKEND")]
    clipboard: Option<ClipboardKind>,

    /// Random source: os or thread
    #[arg(long, value_name = "SOURCE")]
    random: Option<RandomSource>,

    /// Read preferences from this file instead of the default location
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Session settings after applying command-line overrides to the config file.
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    options: GeneratorOptions,
    theme: Theme,
    clipboard: ClipboardKind,
    random: RandomSource,
}

impl Settings {
    fn resolve(config: &Config, args: &Args) -> Self {
        let theme_name = args.theme.as_deref().unwrap_or(&config.theme);
        let theme = match Theme::by_name(theme_name) {
            Some(theme) => theme,
            None => {
                tracing::warn!("Unknown theme {:?}, using default", theme_name);
                Theme::default_theme()
            }
        };

        Self {
            options: GeneratorOptions {
                length: args.length.map_or(config.length, usize::from),
                classes: config.classes,
            },
            theme: theme.clone(),
            clipboard: args.clipboard.unwrap_or(config.clipboard),
            random: args.random.unwrap_or(config.random),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // The guard must outlive the UI so buffered log lines get flushed
    let _log_guard = match logging::log_dir().and_then(|dir| logging::init(&dir)) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Could not initialize logging: {:#}", e);
            None
        }
    };

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        // Call the original panic hook
        original_hook(panic_info);
    }));

    // Run the application and ensure cleanup happens
    let result = run_application(args);

    // Drop the terminal-restoring hook; the default hook is reinstalled
    let _ = panic::take_hook();

    result
}

fn run_application(args: Args) -> Result<()> {
    let (mut config, config_path) = match &args.config {
        Some(path) => (Config::load_from(path)?, Some(path.clone())),
        None => (Config::load(), None),
    };

    let settings = Settings::resolve(&config, &args);
    tracing::info!(
        length = settings.options.length,
        clipboard = %settings.clipboard,
        random = %settings.random,
        theme = settings.theme.name,
        "Starting passgen"
    );

    let mut app = App::new(settings.options, settings.random, settings.theme);
    let mut clipboard = clipboard::from_kind(settings.clipboard);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(
        &mut terminal,
        &mut app,
        &mut event_reader,
        clipboard.as_mut(),
        &mut config,
        config_path.as_deref(),
    );

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    // Return the first error that occurred, or Ok if both succeeded
    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// Write the new theme name to the config file.
fn save_theme(config: &mut Config, path: Option<&Path>, theme: &str) -> Result<()> {
    config.theme = theme.to_string();
    match path {
        Some(path) => config.save_to(path),
        None => config.save(),
    }
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
    clipboard: &mut dyn Clipboard,
    config: &mut Config,
    config_path: Option<&Path>,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::render(f, app))
            .map_err(|e| anyhow!("Failed to draw terminal UI: {}", e))?;

        let event = match event_reader.read_event(Duration::from_millis(250))? {
            Some(e) => e,
            None if app.should_quit => break,
            None => continue,
        };

        // Resize and focus events only need the redraw at the top of the loop
        if let Event::Key(key) = event {
            if let KeyOutcome::ThemeChanged(name) = ui::handle_key(app, key, clipboard) {
                if let Err(e) = save_theme(config, config_path, name) {
                    tracing::warn!("Failed to save theme: {:#}", e);
                    app.status = Some(format!("Theme not saved: {:#}", e));
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
