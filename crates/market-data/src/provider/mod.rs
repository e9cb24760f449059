//! Exchange-rate provider abstractions and implementations.
//!
//! This module contains:
//! - The `RateProvider` trait that all providers implement
//! - Concrete provider implementations (exchangerates-style history API)

mod traits;

pub mod exchange_rates_api;

pub use traits::RateProvider;
