//! File logging.
//!
//! The game owns the terminal in raw mode, so nothing may be printed to
//! stdout/stderr while it runs. Logs are only collected when a log file is
//! configured; otherwise no subscriber is installed and `tracing` calls are
//! no-ops.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install a file subscriber if `config.log_path` is set.
///
/// Returns `true` when logging was enabled.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter {:?}", config.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("installing log subscriber")?;

    Ok(true)
}
