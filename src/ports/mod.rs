//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer
//! requires from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `FuturesExchange`: Futures order creation on a remote exchange

pub mod exchange;

pub use exchange::{FuturesExchange, OrderAck};
