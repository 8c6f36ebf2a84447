//! Futures order domain types.
//!
//! Defines the user-facing order vocabulary (side, order kind, time in force),
//! the raw caller input, and the tagged request that only exists once every
//! per-kind required field has been checked.
//!
//! Two surfaces:
//! - `OrderInput`: raw strings exactly as a CLI or web form collected them
//! - `OrderRequest`: validated, one variant per order kind

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ValidationError;

// ────────────────────────────────────────────
// Enums shared across domain and ports
// ────────────────────────────────────────────

/// Order side, serialized as the exchange token `BUY` / `SELL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Exchange wire token.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            _ => Err(ValidationError::UnknownSide(s.to_string())),
        }
    }
}

/// Supported futures order kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderKind {
    /// Fill immediately at the best available price.
    Market,
    /// Rest on the book at `price`.
    Limit,
    /// Becomes a limit order at `price` once `stop_price` trades.
    StopLimit,
}

impl OrderKind {
    /// Exchange wire token.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
            Self::StopLimit => "STOP_LIMIT",
        }
    }

    /// Whether orders of this kind rest on the book and need a time in force.
    #[must_use]
    pub fn is_resting(&self) -> bool {
        matches!(self, Self::Limit | Self::StopLimit)
    }
}

impl std::fmt::Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MARKET" => Ok(Self::Market),
            "LIMIT" => Ok(Self::Limit),
            "STOP_LIMIT" => Ok(Self::StopLimit),
            _ => Err(ValidationError::UnknownOrderType(s.to_string())),
        }
    }
}

/// Time-in-force policy attached to resting orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
    /// Good-til-cancelled.
    Gtc,
}

impl TimeInForce {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gtc => "GTC",
        }
    }
}

// ────────────────────────────────────────────
// Positive decimal amounts
// ────────────────────────────────────────────

/// A strictly positive, normalized decimal (quantity or price).
///
/// Normalization strips trailing zeros, so `68000.0` renders as `68000`
/// on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PositiveDecimal(Decimal);

impl PositiveDecimal {
    /// Returns `None` for zero or negative values.
    #[must_use]
    pub fn new(value: Decimal) -> Option<Self> {
        (value > Decimal::ZERO).then(|| Self(value.normalize()))
    }

    /// Parse a caller-supplied string for the named field.
    ///
    /// Input that `Decimal` cannot hold without rounding is rejected as
    /// `InvalidNumber`; the value sent is always the value typed.
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let value = Decimal::from_str_exact(trimmed).map_err(|_| ValidationError::InvalidNumber {
            field,
            value: raw.to_string(),
        })?;
        Self::new(value).ok_or(ValidationError::NotPositive {
            field,
            value: trimmed.to_string(),
        })
    }

    #[must_use]
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl std::fmt::Display for PositiveDecimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

// ────────────────────────────────────────────
// Raw caller input
// ────────────────────────────────────────────

/// Order parameters as collected by a CLI or web form, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInput {
    /// Trading pair symbol (e.g. `BTCUSDT`), passed through verbatim.
    #[serde(default)]
    pub symbol: String,
    /// `BUY` or `SELL`.
    #[serde(default)]
    pub side: String,
    /// `MARKET`, `LIMIT` or `STOP_LIMIT`.
    #[serde(default)]
    pub order_type: String,
    /// Quantity to trade.
    #[serde(default)]
    pub quantity: String,
    /// Limit price; required for LIMIT and STOP_LIMIT.
    #[serde(default)]
    pub price: Option<String>,
    /// Stop trigger price; required for STOP_LIMIT.
    #[serde(default)]
    pub stop_price: Option<String>,
}

/// Treat missing and blank optional fields alike.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

// ────────────────────────────────────────────
// Validated, tagged request
// ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketOrder {
    pub symbol: String,
    pub side: Side,
    pub quantity: PositiveDecimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitOrder {
    pub symbol: String,
    pub side: Side,
    pub quantity: PositiveDecimal,
    pub price: PositiveDecimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopLimitOrder {
    pub symbol: String,
    pub side: Side,
    pub quantity: PositiveDecimal,
    pub price: PositiveDecimal,
    pub stop_price: PositiveDecimal,
}

/// A fully validated futures order, one variant per order kind.
///
/// Required prices are plain fields of their variant, so a LIMIT order
/// without a price cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderRequest {
    Market(MarketOrder),
    Limit(LimitOrder),
    StopLimit(StopLimitOrder),
}

impl OrderRequest {
    #[must_use]
    pub fn kind(&self) -> OrderKind {
        match self {
            Self::Market(_) => OrderKind::Market,
            Self::Limit(_) => OrderKind::Limit,
            Self::StopLimit(_) => OrderKind::StopLimit,
        }
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::Market(o) => &o.symbol,
            Self::Limit(o) => &o.symbol,
            Self::StopLimit(o) => &o.symbol,
        }
    }

    #[must_use]
    pub fn side(&self) -> Side {
        match self {
            Self::Market(o) => o.side,
            Self::Limit(o) => o.side,
            Self::StopLimit(o) => o.side,
        }
    }

    #[must_use]
    pub fn quantity(&self) -> PositiveDecimal {
        match self {
            Self::Market(o) => o.quantity,
            Self::Limit(o) => o.quantity,
            Self::StopLimit(o) => o.quantity,
        }
    }
}

impl TryFrom<&OrderInput> for OrderRequest {
    type Error = ValidationError;

    fn try_from(input: &OrderInput) -> Result<Self, Self::Error> {
        if input.symbol.trim().is_empty() {
            return Err(ValidationError::EmptySymbol);
        }
        let symbol = input.symbol.clone();
        let side: Side = input.side.parse()?;
        let kind: OrderKind = input.order_type.parse()?;

        if input.quantity.trim().is_empty() {
            return Err(ValidationError::MissingQuantity);
        }
        let quantity = PositiveDecimal::parse("quantity", &input.quantity)?;

        let request = match kind {
            // Prices are dropped unparsed for market orders.
            OrderKind::Market => Self::Market(MarketOrder {
                symbol,
                side,
                quantity,
            }),
            OrderKind::Limit => {
                let raw_price = present(&input.price).ok_or(ValidationError::MissingPrice)?;
                Self::Limit(LimitOrder {
                    symbol,
                    side,
                    quantity,
                    price: PositiveDecimal::parse("price", raw_price)?,
                })
            }
            OrderKind::StopLimit => {
                let (Some(raw_price), Some(raw_stop)) =
                    (present(&input.price), present(&input.stop_price))
                else {
                    return Err(ValidationError::MissingStopLimitPrices);
                };
                Self::StopLimit(StopLimitOrder {
                    symbol,
                    side,
                    quantity,
                    price: PositiveDecimal::parse("price", raw_price)?,
                    stop_price: PositiveDecimal::parse("stop_price", raw_stop)?,
                })
            }
        };

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(order_type: &str, price: Option<&str>, stop_price: Option<&str>) -> OrderInput {
        OrderInput {
            symbol: "BTCUSDT".to_string(),
            side: "BUY".to_string(),
            order_type: order_type.to_string(),
            quantity: "0.01".to_string(),
            price: price.map(String::from),
            stop_price: stop_price.map(String::from),
        }
    }

    #[test]
    fn test_side_parsing_is_case_insensitive() {
        assert_eq!("buy".parse::<Side>().unwrap(), Side::Buy);
        assert_eq!(" SELL ".parse::<Side>().unwrap(), Side::Sell);
        assert_eq!(
            "HOLD".parse::<Side>(),
            Err(ValidationError::UnknownSide("HOLD".to_string()))
        );
    }

    #[test]
    fn test_unknown_order_type_is_rejected() {
        let err = OrderRequest::try_from(&input("STOP_MARKET", None, None)).unwrap_err();
        assert_eq!(err, ValidationError::UnknownOrderType("STOP_MARKET".to_string()));
    }

    #[test]
    fn test_market_drops_prices_without_parsing() {
        let req = OrderRequest::try_from(&input("market", Some("garbage"), Some("-1"))).unwrap();
        assert_eq!(req.kind(), OrderKind::Market);
        assert_eq!(req.quantity().value(), dec!(0.01));
    }

    #[test]
    fn test_limit_requires_price() {
        assert_eq!(
            OrderRequest::try_from(&input("LIMIT", None, None)),
            Err(ValidationError::MissingPrice)
        );
        assert_eq!(
            OrderRequest::try_from(&input("LIMIT", Some("  "), None)),
            Err(ValidationError::MissingPrice)
        );
    }

    #[test]
    fn test_stop_limit_requires_both_prices() {
        for (price, stop) in [(Some("68000"), None), (None, Some("67000")), (None, None)] {
            assert_eq!(
                OrderRequest::try_from(&input("STOP_LIMIT", price, stop)),
                Err(ValidationError::MissingStopLimitPrices)
            );
        }
    }

    #[test]
    fn test_symbol_passed_through_verbatim() {
        let mut raw = input("MARKET", None, None);
        raw.symbol = "btcusdt".to_string();
        let req = OrderRequest::try_from(&raw).unwrap();
        assert_eq!(req.symbol(), "btcusdt");
    }

    #[test]
    fn test_quantity_must_be_positive_number() {
        let mut raw = input("MARKET", None, None);
        raw.quantity = "0".to_string();
        assert!(matches!(
            OrderRequest::try_from(&raw),
            Err(ValidationError::NotPositive { field: "quantity", .. })
        ));

        raw.quantity = "abc".to_string();
        assert!(matches!(
            OrderRequest::try_from(&raw),
            Err(ValidationError::InvalidNumber { field: "quantity", .. })
        ));

        raw.quantity = String::new();
        assert_eq!(OrderRequest::try_from(&raw), Err(ValidationError::MissingQuantity));
    }

    #[test]
    fn test_empty_symbol_is_rejected() {
        for symbol in ["", "   "] {
            let mut raw = input("MARKET", None, None);
            raw.symbol = symbol.to_string();
            assert_eq!(OrderRequest::try_from(&raw), Err(ValidationError::EmptySymbol));
        }
    }

    #[test]
    fn test_limit_price_must_be_positive_number() {
        assert!(matches!(
            OrderRequest::try_from(&input("LIMIT", Some("abc"), None)),
            Err(ValidationError::InvalidNumber { field: "price", .. })
        ));
        assert!(matches!(
            OrderRequest::try_from(&input("LIMIT", Some("-68000"), None)),
            Err(ValidationError::NotPositive { field: "price", .. })
        ));
    }

    #[test]
    fn test_stop_limit_stop_price_must_be_positive_number() {
        assert!(matches!(
            OrderRequest::try_from(&input("STOP_LIMIT", Some("68000"), Some("1,5"))),
            Err(ValidationError::InvalidNumber { field: "stop_price", .. })
        ));
        assert!(matches!(
            OrderRequest::try_from(&input("STOP_LIMIT", Some("68000"), Some("0"))),
            Err(ValidationError::NotPositive { field: "stop_price", .. })
        ));
        assert!(matches!(
            OrderRequest::try_from(&input("STOP_LIMIT", Some("0.0"), Some("67000"))),
            Err(ValidationError::NotPositive { field: "price", .. })
        ));
    }

    #[test]
    fn test_over_precise_input_is_rejected_not_rounded() {
        let mut raw = input("MARKET", None, None);
        raw.quantity = "1.00000000000000000000000000001".to_string();
        assert!(matches!(
            OrderRequest::try_from(&raw),
            Err(ValidationError::InvalidNumber { field: "quantity", .. })
        ));

        raw.quantity = "0.00000000000000000000000000001".to_string();
        assert!(matches!(
            OrderRequest::try_from(&raw),
            Err(ValidationError::InvalidNumber { field: "quantity", .. })
        ));

        assert!(matches!(
            OrderRequest::try_from(&input(
                "LIMIT",
                Some("68000.1234567890123456789012345"),
                None
            )),
            Err(ValidationError::InvalidNumber { field: "price", .. })
        ));
    }

    #[test]
    fn test_max_scale_input_is_kept_exactly() {
        let price = PositiveDecimal::parse("price", "0.0000000000000000000000000001").unwrap();
        assert_eq!(price.to_string(), "0.0000000000000000000000000001");
    }

    #[test]
    fn test_positive_decimal_normalizes() {
        let price = PositiveDecimal::parse("price", "68000.0").unwrap();
        assert_eq!(price.to_string(), "68000");
        assert!(PositiveDecimal::new(dec!(-1)).is_none());
    }
}
