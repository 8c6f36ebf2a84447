//! Order error taxonomy.
//!
//! `ValidationError` is raised locally before any network call.
//! `OrderError` is what every order attempt resolves to on failure,
//! whether validation or the exchange rejected it.

use thiserror::Error;

/// A required field is missing or malformed for the requested order kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("symbol must not be empty")]
    EmptySymbol,

    #[error("unrecognized side '{0}', expected BUY or SELL")]
    UnknownSide(String),

    #[error("unrecognized order type '{0}', expected MARKET, LIMIT or STOP_LIMIT")]
    UnknownOrderType(String),

    #[error("quantity must be provided")]
    MissingQuantity,

    #[error("{field} '{value}' is not a valid decimal number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: String },

    #[error("price must be provided for LIMIT orders")]
    MissingPrice,

    #[error("both stop_price and price must be provided for STOP_LIMIT orders")]
    MissingStopLimitPrices,
}

/// Failure outcome of a single order attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Rejected locally; the exchange was never contacted.
    #[error("invalid order: {0}")]
    Validation(#[from] ValidationError),

    /// The exchange call failed. Holds the exchange/transport error text verbatim.
    #[error("exchange error: {0}")]
    Exchange(String),
}

impl OrderError {
    /// Human-readable failure reason for CLI output and flash messages.
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
