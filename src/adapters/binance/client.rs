//! Futures HTTP Client - Signed REST API Client
//!
//! Wraps reqwest with request signing for private USDT-M futures
//! endpoints. Each call is a single attempt; timeouts are whatever the
//! underlying transport enforces.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::form_urlencoded;

use super::auth::BinanceAuth;
use super::types::ApiErrorResponse;
use crate::config::{ExchangeConfig, TESTNET_BASE_URL};

/// Configuration for the futures HTTP client.
#[derive(Debug, Clone)]
pub struct FuturesClientConfig {
  /// Base URL for the futures API.
  pub base_url: String,
  /// Request timeout.
  pub timeout: Duration,
  /// `recvWindow` sent with every signed request (ms).
  pub recv_window_ms: u64,
}

impl Default for FuturesClientConfig {
  fn default() -> Self {
    Self {
      base_url: TESTNET_BASE_URL.to_string(),
      timeout: Duration::from_secs(10),
      recv_window_ms: 5_000,
    }
  }
}

impl From<&ExchangeConfig> for FuturesClientConfig {
  fn from(config: &ExchangeConfig) -> Self {
    Self {
      base_url: config.base_url.trim_end_matches('/').to_string(),
      timeout: Duration::from_secs(config.timeout_seconds),
      recv_window_ms: config.recv_window_ms,
    }
  }
}

/// HTTP client for the futures API.
pub struct FuturesHttpClient {
  /// Underlying HTTP client.
  http: Client,
  /// Authentication manager.
  auth: Arc<BinanceAuth>,
  /// Client configuration.
  config: FuturesClientConfig,
}

impl FuturesHttpClient {
  /// Create a new futures client.
  pub fn new(auth: Arc<BinanceAuth>, config: FuturesClientConfig) -> Result<Self> {
    let http = Client::builder()
      .timeout(config.timeout)
      .pool_max_idle_per_host(5)
      .build()
      .context("Failed to build HTTP client")?;

    Ok(Self { http, auth, config })
  }

  /// Build the signed query for `params`: params, recvWindow and
  /// timestamp, followed by the signature over all of them.
  #[must_use]
  pub fn signed_query(&self, params: &[(&str, String)], timestamp_ms: u64) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
      serializer.append_pair(key, value);
    }
    serializer.append_pair("recvWindow", &self.config.recv_window_ms.to_string());
    serializer.append_pair("timestamp", &timestamp_ms.to_string());
    let query = serializer.finish();

    let signature = self.auth.sign(&query);
    format!("{query}&signature={signature}")
  }

  /// Execute a signed POST and decode the JSON response.
  pub async fn post_signed<T: DeserializeOwned>(
    &self,
    path: &str,
    params: &[(&str, String)],
  ) -> Result<T> {
    let query = self.signed_query(params, BinanceAuth::timestamp_ms());
    let url = format!("{}{}?{}", self.config.base_url, path, query);

    debug!(path, "Sending signed request");

    let response = self
      .http
      .post(&url)
      .header("X-MBX-APIKEY", self.auth.api_key())
      .send()
      .await
      .with_context(|| format!("Request to {path} failed"))?;

    let status = response.status();
    let body = response
      .text()
      .await
      .context("Failed to read response body")?;

    if !status.is_success() {
      return Err(match serde_json::from_str::<ApiErrorResponse>(&body) {
        Ok(api_err) => anyhow::anyhow!("{api_err}"),
        Err(_) => anyhow::anyhow!("HTTP {status}: {body}"),
      });
    }

    serde_json::from_str(&body).with_context(|| format!("Failed to parse response from {path}"))
  }
}
