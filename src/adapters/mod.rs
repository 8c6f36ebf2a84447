//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies (HTTP client, HTTP server).
//!
//! Adapter categories:
//! - `binance`: USDT-M futures REST API client and auth
//! - `web`: Order form served over HTTP

pub mod binance;
pub mod web;
