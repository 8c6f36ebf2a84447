//! Order Submitter - Validate, Build, Submit
//!
//! Turns caller-supplied order parameters into one exchange call:
//! - Validating per-kind required fields (no network on failure)
//! - Building the wire payload from the tagged request
//! - Submitting once through the `FuturesExchange` port
//! - Logging exactly one record per attempt (info or error)

use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::domain::error::OrderError;
use crate::domain::order::{OrderInput, OrderRequest};
use crate::domain::payload::OrderPayload;
use crate::ports::exchange::{FuturesExchange, OrderAck};

/// Outcome of a single order attempt.
pub type OrderResult = Result<OrderAck, OrderError>;

/// Places futures orders through an injected exchange capability.
///
/// Holds no mutable state; one instance can serve concurrent callers.
pub struct OrderSubmitter<E: FuturesExchange> {
  /// Exchange port.
  exchange: Arc<E>,
}

impl<E: FuturesExchange> OrderSubmitter<E> {
  /// Create a new order submitter.
  #[must_use]
  pub fn new(exchange: Arc<E>) -> Self {
    Self { exchange }
  }

  /// Validate raw caller input and place the order.
  ///
  /// Validation failures are logged and returned without touching the
  /// exchange.
  #[instrument(skip(self, input), fields(symbol = %input.symbol, order_type = %input.order_type))]
  pub async fn place_order(&self, input: &OrderInput) -> OrderResult {
    match OrderRequest::try_from(input) {
      Ok(request) => self.submit(request).await,
      Err(e) => {
        let err = OrderError::from(e);
        error!(kind = %input.order_type, error = %err, "Error placing order");
        Err(err)
      }
    }
  }

  /// Place an already validated order. Single attempt, no retry.
  pub async fn submit(&self, request: OrderRequest) -> OrderResult {
    let kind = request.kind();
    let payload = OrderPayload::from(&request);

    match self.exchange.create_futures_order(&payload).await {
      Ok(ack) => {
        info!(kind = %kind, response = ?ack, "{kind} order placed");
        Ok(ack)
      }
      Err(e) => {
        let err = OrderError::Exchange(format!("{e:#}"));
        error!(kind = %kind, error = %err, "Error placing order");
        Err(err)
      }
    }
  }
}
