//! File logging. The terminal is owned by the UI, so log lines go to
//! `~/.local/share/roster/roster.log` instead of stderr.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "roster.log";

/// Returns the directory log files are written to, if the platform has one.
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("roster"))
}

/// Installs the global subscriber writing to `dir/roster.log`.
///
/// The filter defaults to `info` and honours `RUST_LOG`. The returned guard
/// flushes buffered lines on drop and must be held until shutdown. Returns
/// `None` if a global subscriber is already installed.
pub fn init(dir: &Path) -> Option<WorkerGuard> {
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .ok()
        .map(|()| guard)
}
