//! Logging setup.
//!
//! Installs a `tracing-subscriber` fmt layer writing one line per event
//! (timestamp, level, target, fields) to an append-only log file.
//! `RUST_LOG` overrides the configured level.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global tracing subscriber.
///
/// # Errors
/// Fails if the log file cannot be opened or a subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(&config.level));

  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_ansi(false);

  let installed = if config.file.trim().is_empty() {
    let builder = builder.with_writer(std::io::stderr);
    if config.json {
      builder.json().try_init()
    } else {
      builder.try_init()
    }
  } else {
    let path = Path::new(&config.file);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      std::fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
      .create(true)
      .append(true)
      .open(path)
      .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let builder = builder.with_writer(Mutex::new(file));
    if config.json {
      builder.json().try_init()
    } else {
      builder.try_init()
    }
  };

  installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}
