//! File-based logging setup.
//!
//! The TUI owns the terminal, so logs go to a daily-rolling file under
//! ${TUDO_HOME}/logs instead of stderr. The returned guard must stay alive
//! for the process lifetime or buffered lines are lost.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tudo_core::config::{Config, paths};

pub fn init(config: &Config) -> Result<WorkerGuard> {
    let dir = paths::logs_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, "tudo.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    // Filter precedence: config key, then TUDO_LOG env, then "info".
    let filter = match &config.log_filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_env("TUDO_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
