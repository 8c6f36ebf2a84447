//! Configuration Module - TOML-based Bot Configuration
//!
//! Loads and validates configuration from `config.toml` with
//! environment variable overrides. Every field has a default so a
//! missing file still yields a working testnet setup.
//! API credentials are NOT part of this file; they come from the
//! environment (see `adapters::binance::auth`).

pub mod loader;

use serde::Deserialize;

/// USDT-M futures testnet endpoint.
pub const TESTNET_BASE_URL: &str = "https://testnet.binancefuture.com";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Exchange endpoint and transport settings.
  #[serde(default)]
  pub exchange: ExchangeConfig,
  /// Log output.
  #[serde(default)]
  pub logging: LoggingConfig,
  /// Web form server.
  #[serde(default)]
  pub web: WebConfig,
}

/// Exchange endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeConfig {
  /// Futures REST API base URL.
  #[serde(default = "default_base_url")]
  pub base_url: String,
  /// Signed request validity window (milliseconds, exchange max 60000).
  #[serde(default = "default_recv_window")]
  pub recv_window_ms: u64,
  /// Transport timeout in seconds.
  #[serde(default = "default_timeout")]
  pub timeout_seconds: u64,
}

impl Default for ExchangeConfig {
  fn default() -> Self {
    Self {
      base_url: default_base_url(),
      recv_window_ms: default_recv_window(),
      timeout_seconds: default_timeout(),
    }
  }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
  /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
  #[serde(default = "default_log_level")]
  pub level: String,
  /// Append-only log file. Empty means stderr.
  #[serde(default = "default_log_file")]
  pub file: String,
  /// Emit JSON lines instead of plain text.
  #[serde(default)]
  pub json: bool,
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: default_log_level(),
      file: default_log_file(),
      json: false,
    }
  }
}

/// Web form server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
  /// Bind address for the order form.
  #[serde(default = "default_bind_address")]
  pub bind_address: String,
}

impl Default for WebConfig {
  fn default() -> Self {
    Self {
      bind_address: default_bind_address(),
    }
  }
}

// Default value functions for serde

fn default_base_url() -> String {
  TESTNET_BASE_URL.to_string()
}

fn default_recv_window() -> u64 {
  5_000
}

fn default_timeout() -> u64 {
  10
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_log_file() -> String {
  "bot.log".to_string()
}

fn default_bind_address() -> String {
  "0.0.0.0:8000".to_string()
}
