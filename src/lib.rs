//! Futures Order Bot — Library Root
//!
//! Re-exports all modules for the binaries and integration tests.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
pub mod usecases;
