//! Tracing subscriber setup.
//!
//! The interactive UI owns the terminal, so it logs to a daily rolling file.
//! Everything else logs to stderr, leaving stdout for results and the stdio
//! protocol.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Variable whose filter directives override the configured level.
pub const LOG_ENV: &str = "AOILER_LOG";

const LOG_FILE_PREFIX: &str = "aoiler.log";

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level))
}

/// Log to `directory/aoiler.log.<date>`.
///
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init_for_tui(directory: &Path, level: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(directory)
        .with_context(|| format!("failed to create log directory {}", directory.display()))?;
    let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))?;
    Ok(guard)
}

/// Log to stderr.
pub fn init_for_stderr(level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))
}
