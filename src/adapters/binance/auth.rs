//! Futures API Authentication — HMAC-SHA256 Request Signing
//!
//! Signs every private futures request using HMAC-SHA256 over the
//! query string. Credentials come from environment variables
//! (BINANCE_API_KEY, BINANCE_API_SECRET; legacy API_Key, Secret_Key).

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

/// Preferred environment variable names.
pub const API_KEY_ENV: &str = "BINANCE_API_KEY";
pub const API_SECRET_ENV: &str = "BINANCE_API_SECRET";

/// Names accepted for compatibility with older `.env` files.
const LEGACY_API_KEY_ENV: &str = "API_Key";
const LEGACY_API_SECRET_ENV: &str = "Secret_Key";

/// Futures API authentication handler.
///
/// Holds the API key (sent as a header) and secret (only ever used
/// to compute signatures).
#[derive(Clone)]
pub struct BinanceAuth {
    api_key: String,
    api_secret: String,
}

impl std::fmt::Debug for BinanceAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceAuth")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl BinanceAuth {
    #[must_use]
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Load credentials from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load credentials through the given lookup, preferring the
    /// `BINANCE_*` names over the legacy ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |primary: &str, legacy: &str| {
            lookup(primary)
                .or_else(|| lookup(legacy))
                .filter(|v| !v.trim().is_empty())
        };

        let api_key = read(API_KEY_ENV, LEGACY_API_KEY_ENV)
            .with_context(|| format!("{API_KEY_ENV} not set"))?;
        let api_secret = read(API_SECRET_ENV, LEGACY_API_SECRET_ENV)
            .with_context(|| format!("{API_SECRET_ENV} not set"))?;

        Ok(Self::new(api_key, api_secret))
    }

    /// Get the API key for the `X-MBX-APIKEY` header.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Current Unix timestamp in milliseconds (for the `timestamp` param).
    #[must_use]
    pub fn timestamp_ms() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    /// Sign a query string: lowercase hex of HMAC-SHA256(secret, query).
    #[must_use]
    pub fn sign(&self, query: &str) -> String {
        let mac = hmac_sha256::HMAC::mac(query.as_bytes(), self.api_secret.as_bytes());
        hex::encode(mac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_sign_matches_reference_vector() {
        let auth = BinanceAuth::new(
            "vmPUZE6mv9SD5VNHk4HlWFsOr6aKE2zvsw0MuIgwCIPy6utIco14y7Ju91duEh8A",
            "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j",
        );
        let query = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";
        assert_eq!(
            auth.sign(query),
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[test]
    fn test_from_lookup_prefers_primary_names() {
        let env: HashMap<&str, &str> = [
            (API_KEY_ENV, "primary-key"),
            (API_SECRET_ENV, "primary-secret"),
            ("API_Key", "legacy-key"),
            ("Secret_Key", "legacy-secret"),
        ]
        .into_iter()
        .collect();
        let auth = BinanceAuth::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(auth.api_key(), "primary-key");
    }

    #[test]
    fn test_from_lookup_falls_back_to_legacy_names() {
        let env: HashMap<&str, &str> =
            [("API_Key", "legacy-key"), ("Secret_Key", "legacy-secret")].into_iter().collect();
        let auth = BinanceAuth::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(auth.api_key(), "legacy-key");
    }

    #[test]
    fn test_from_lookup_missing_secret() {
        let err = BinanceAuth::from_lookup(|k| (k == API_KEY_ENV).then(|| "key".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains(API_SECRET_ENV));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let auth = BinanceAuth::new("key", "super-secret");
        let printed = format!("{auth:?}");
        assert!(!printed.contains("super-secret"));
    }
}
