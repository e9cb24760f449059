//! Ratecast Market Data Crate
//!
//! This crate provides provider-agnostic historical exchange-rate fetching
//! for the Ratecast application.
//!
//! # Overview
//!
//! A provider answers a single question: "what were the daily rates of
//! `base` against `target` between two dates?" It performs exactly one
//! outbound request per call, never retries and never caches. Caching and
//! gap reconciliation live in `ratecast-core`.
//!
//! ```text
//! +------------------+     +------------------+     +------------------+
//! |  RateReconciler  | --> |   RateProvider   | --> |   remote HTTP    |
//! |  (ratecast-core) |     |   (this crate)   |     |   rates source   |
//! +------------------+     +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    RateSeries    |  (date -> code -> rate)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`RateProvider`] - Trait every rate source implements
//! - [`RateSeries`] - Raw provider response, keyed by date then currency code
//! - [`MarketDataError`] - Provider failures, including upstream error payloads

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{CurrencyCode, RateObservation, RateSeries};
pub use provider::exchange_rates_api::ExchangeRatesApiProvider;
pub use provider::RateProvider;
