//! Logging setup: stderr plus a per-session log file.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE: &str = "skirmish.log";

/// Platform log directory.
///
/// - macOS: `~/Library/Caches/skirmish/logs`
/// - Linux: `~/.cache/skirmish/logs` (or `$XDG_CACHE_HOME/skirmish/logs`)
/// - Windows: `%LOCALAPPDATA%\skirmish\cache\logs`
/// - Fallback: `/tmp/skirmish/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "skirmish")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/skirmish"))
        .join("logs")
}

/// Session name used when none is configured.
pub fn generated_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}

/// Installs the global subscriber.
///
/// Filtering comes from `RUST_LOG` (default `info`). Events go to stderr and
/// to `<log_dir>/<session_id>/skirmish.log`. Keep the returned guard alive
/// until exit so buffered file output is flushed.
pub fn setup_logging(log_dir: &Path, session_id: &str) -> Result<WorkerGuard> {
    let session_log_dir = log_dir.join(session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(session = session_id, "logging initialized");
    tracing::info!("Log file: {}", session_log_dir.join(LOG_FILE).display());

    Ok(guard)
}
