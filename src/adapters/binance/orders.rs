//! Futures Order Executor — Adapter for Order Creation
//!
//! Implements the `FuturesExchange` port using the shared
//! `FuturesHttpClient` for signed requests.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, instrument};

use super::client::FuturesHttpClient;
use crate::domain::payload::OrderPayload;
use crate::ports::exchange::{FuturesExchange, OrderAck};

/// New-order endpoint for USDT-M futures.
pub const NEW_ORDER_PATH: &str = "/fapi/v1/order";

/// Futures order executor backed by the shared signed client.
pub struct BinanceOrderExecutor {
    client: Arc<FuturesHttpClient>,
}

impl BinanceOrderExecutor {
    #[must_use]
    pub fn new(client: Arc<FuturesHttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FuturesExchange for BinanceOrderExecutor {
    #[instrument(skip(self, payload), fields(symbol = %payload.symbol, order_type = %payload.order_type))]
    async fn create_futures_order(&self, payload: &OrderPayload) -> Result<OrderAck> {
        let ack: OrderAck = self
            .client
            .post_signed(NEW_ORDER_PATH, &payload.params())
            .await
            .context("Failed to create futures order")?;

        debug!(order_id = ack.order_id, status = %ack.status, "Exchange acknowledged order");
        Ok(ack)
    }
}
