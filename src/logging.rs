//! `tracing` setup.
//!
//! The terminal is in raw mode while playing, so diagnostics never go to
//! stdout/stderr: they are written to `SNAKE_LOG_PATH` or dropped.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::SnakeConfig;

/// Install the global subscriber if a log file is configured.
///
/// Returns whether a subscriber was installed.
pub fn init(config: &SnakeConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .map_err(|e| anyhow!("installing tracing subscriber: {}", e))?;

    Ok(true)
}
