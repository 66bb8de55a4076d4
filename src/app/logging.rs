//! File logging
//!
//! The terminal belongs to the UI, so logs only go to a file given with
//! `--log-file`. `LIBVIEW_LOG` holds the filter directives.

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable with the log filter
pub const LOG_ENV: &str = "LIBVIEW_LOG";
const DEFAULT_FILTER: &str = "libview=info";

/// Install the global subscriber writing to `log_file`. The returned guard
/// flushes pending lines when dropped and must outlive the app.
pub fn init_logging(log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let Some(log_file) = log_file else {
        return Ok(None);
    };

    let dir = match log_file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create log folder {}", dir.display()))?;
    let file_name = log_file
        .file_name()
        .with_context(|| format!("invalid log file {}", log_file.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "lv started");
    Ok(Some(guard))
}
