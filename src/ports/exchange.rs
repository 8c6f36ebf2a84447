//! Futures Exchange Port - Order Creation Interface
//!
//! Defines the single capability the order submitter needs from the
//! outside world: create one futures order and hand back the exchange's
//! acknowledgement.
//!
//! Key design decisions:
//! - One attempt per call, no retries inside implementations
//! - Credentials and endpoint are fixed at construction, read-only afterwards
//! - Implementations must be safe to share across concurrent callers

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::payload::OrderPayload;

/// Exchange acknowledgement of a newly created futures order.
///
/// Mirrors the fields the USDT-M futures endpoint echoes back. Numeric
/// fields stay as strings, the way the exchange sends them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderAck {
  /// Exchange-assigned order ID.
  pub order_id: i64,
  /// Trading pair.
  pub symbol: String,
  /// Order status (NEW, FILLED, ...).
  pub status: String,
  /// Client order ID assigned by the exchange when none was sent.
  pub client_order_id: Option<String>,
  /// "BUY" or "SELL".
  pub side: Option<String>,
  /// Order type as accepted by the exchange.
  #[serde(rename = "type")]
  pub order_type: Option<String>,
  /// Time in force, when applicable.
  pub time_in_force: Option<String>,
  /// Limit price.
  pub price: Option<String>,
  /// Stop trigger price.
  pub stop_price: Option<String>,
  /// Original quantity.
  pub orig_qty: Option<String>,
  /// Quantity filled so far.
  pub executed_qty: Option<String>,
  /// Average fill price.
  pub avg_price: Option<String>,
  /// Last update time (Unix ms).
  pub update_time: Option<u64>,
}

/// Trait for futures exchange clients.
///
/// Implementors translate an `OrderPayload` into an authenticated
/// exchange call. Errors carry the exchange's own text so callers can
/// surface it unchanged.
#[async_trait]
pub trait FuturesExchange: Send + Sync + 'static {
  /// Create a single futures order.
  ///
  /// # Errors
  /// Returns error on transport failure, authentication failure, or
  /// when the exchange rejects the order.
  async fn create_futures_order(&self, payload: &OrderPayload) -> anyhow::Result<OrderAck>;
}
