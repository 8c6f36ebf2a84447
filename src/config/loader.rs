//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, applying environment overrides,
//! validating all parameters, and providing clear error messages
//! for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;

use super::AppConfig;

/// Environment variable that overrides `exchange.base_url`.
pub const BASE_URL_ENV: &str = "FUTURES_BASE_URL";

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let mut config = parse_config(&content)?;
  apply_env_overrides(&mut config, |key| std::env::var(key).ok());
  validate_config(&config)?;

  Ok(config)
}

/// Like `load_config`, but a missing file yields the defaults.
pub fn load_or_default(path: &str) -> Result<AppConfig> {
  if Path::new(path).exists() {
    return load_config(path);
  }

  let mut config = AppConfig::default();
  apply_env_overrides(&mut config, |key| std::env::var(key).ok());
  validate_config(&config)?;
  Ok(config)
}

/// Parse TOML content without validation.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  toml::from_str(content).context("Failed to parse config.toml")
}

/// Apply environment overrides through the given lookup.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
  F: Fn(&str) -> Option<String>,
{
  if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
    config.exchange.base_url = url.trim().to_string();
  }
}

/// Validate all configuration parameters.
pub fn validate_config(config: &AppConfig) -> Result<()> {
  let base_url = &config.exchange.base_url;
  anyhow::ensure!(!base_url.is_empty(), "exchange.base_url must not be empty");
  anyhow::ensure!(
    base_url.starts_with("http://") || base_url.starts_with("https://"),
    "exchange.base_url must be an http(s) URL, got {base_url}"
  );
  anyhow::ensure!(
    (1..=60_000).contains(&config.exchange.recv_window_ms),
    "exchange.recv_window_ms must be in [1, 60000], got {}",
    config.exchange.recv_window_ms
  );
  anyhow::ensure!(
    config.exchange.timeout_seconds > 0,
    "exchange.timeout_seconds must be positive"
  );
  anyhow::ensure!(
    !config.web.bind_address.is_empty(),
    "web.bind_address must not be empty"
  );
  anyhow::ensure!(
    config.logging.level.trim().parse::<LevelFilter>().is_ok(),
    "logging.level must be one of trace, debug, info, warn, error, off; got {}",
    config.logging.level
  );

  Ok(())
}
