//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces.
//!
//! Use cases:
//! - `OrderSubmitter`: Validate, build and submit one futures order

pub mod order_submitter;

pub use order_submitter::{OrderResult, OrderSubmitter};
