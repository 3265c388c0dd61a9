//! Logging initialization.
//!
//! Logs are written to a file through a non-blocking appender; the TUI
//! occupies the terminal, so nothing is ever printed to stderr while the
//! screen is up. The returned guard must be held for the process lifetime
//! so buffered lines are flushed on exit.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber writing to `path`.
///
/// The filter comes from `RUST_LOG` when set, defaulting to `debug`.
pub fn init(path: &Path) -> Result<WorkerGuard> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
