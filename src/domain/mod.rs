//! Domain layer - Order vocabulary, validation and wire payload.
//!
//! Pure logic only (hexagonal architecture inner ring): no I/O, no clock,
//! no configuration. Everything here is testable in isolation.

pub mod error;
pub mod order;
pub mod payload;

// Re-export core types for convenience
pub use error::{OrderError, ValidationError};
pub use order::{
    LimitOrder, MarketOrder, OrderInput, OrderKind, OrderRequest, PositiveDecimal, Side,
    StopLimitOrder, TimeInForce,
};
pub use payload::OrderPayload;
