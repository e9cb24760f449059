//! Ratecast Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for Ratecast: the historical-rate
//! cache reconciler and the business-day forecaster. It is database-agnostic
//! and defines the [`fx::RateStoreTrait`] implemented by the `storage-sqlite`
//! crate.

pub mod constants;
pub mod errors;
pub mod forecast;
pub mod fx;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
