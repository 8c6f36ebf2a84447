//! Exchange order payload.
//!
//! Pure mapping from a validated `OrderRequest` to the key/value shape the
//! futures order endpoint expects. Decimals are carried as strings so no
//! binary floating-point value ever reaches the wire.

use rust_decimal::Decimal;
use serde::Serialize;

use super::order::{OrderKind, OrderRequest, Side, TimeInForce};

/// Wire-shape of a new futures order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub symbol: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderKind,
    pub quantity: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
}

impl OrderPayload {
    /// Ordered request parameters, as signed and sent to the exchange.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("symbol", self.symbol.clone()),
            ("side", self.side.as_str().to_string()),
            ("type", self.order_type.as_str().to_string()),
            ("quantity", self.quantity.to_string()),
        ];
        if let Some(tif) = self.time_in_force {
            params.push(("timeInForce", tif.as_str().to_string()));
        }
        if let Some(price) = self.price {
            params.push(("price", price.to_string()));
        }
        if let Some(stop_price) = self.stop_price {
            params.push(("stopPrice", stop_price.to_string()));
        }
        params
    }
}

impl From<&OrderRequest> for OrderPayload {
    fn from(request: &OrderRequest) -> Self {
        let (price, stop_price) = match request {
            OrderRequest::Market(_) => (None, None),
            OrderRequest::Limit(o) => (Some(o.price.value()), None),
            OrderRequest::StopLimit(o) => (Some(o.price.value()), Some(o.stop_price.value())),
        };
        let kind = request.kind();

        Self {
            symbol: request.symbol().to_string(),
            side: request.side(),
            order_type: kind,
            quantity: request.quantity().value(),
            time_in_force: kind.is_resting().then_some(TimeInForce::Gtc),
            price,
            stop_price,
        }
    }
}
