//! # Logging
//!
//! The terminal belongs to the UI, so log output goes to a file instead:
//!
//! ```text
//! ~/.local/share/passgen/passgen.log   (Linux; platform equivalent elsewhere)
//! ```
//!
//! Filtering is read from `PASSGEN_LOG` (same syntax as `RUST_LOG`), falling
//! back to `passgen=info`. Generated passwords are never logged.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PASSGEN_LOG";

const DEFAULT_FILTER: &str = "passgen=info";
const LOG_FILE_NAME: &str = "passgen.log";

/// Directory the log file is written to.
pub fn log_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "passgen")
        .context("Could not determine data directory")?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Install the global subscriber writing to `dir/passgen.log`.
///
/// The returned guard flushes pending lines when dropped; keep it alive for
/// the lifetime of the program.
pub fn init(dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(guard)
}
