//! Binance USDT-M Futures API Adapter
//!
//! Implements the exchange-client capability against the futures REST
//! API (testnet by default). Handles request signing and order creation.
//!
//! Sub-modules:
//! - `auth`: API key/secret handling and HMAC-SHA256 signing
//! - `client`: Signed HTTP client (single attempt, no retries)
//! - `orders`: `FuturesExchange` implementation
//! - `types`: API error body

pub mod auth;
pub mod client;
pub mod orders;
pub mod types;

use std::sync::Arc;

use anyhow::Result;

use crate::config::ExchangeConfig;

pub use auth::BinanceAuth;
pub use client::{FuturesClientConfig, FuturesHttpClient};
pub use orders::BinanceOrderExecutor;

/// Wire an order executor from credentials and exchange settings.
pub fn connect(auth: BinanceAuth, config: &ExchangeConfig) -> Result<BinanceOrderExecutor> {
    let client = FuturesHttpClient::new(Arc::new(auth), FuturesClientConfig::from(config))?;
    Ok(BinanceOrderExecutor::new(Arc::new(client)))
}
