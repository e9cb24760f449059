//! Market data models
//!
//! - `rate_series` - Raw historical rates as returned by a provider (RateSeries, RateObservation)

mod rate_series;

pub use rate_series::{RateObservation, RateSeries};

/// Currency code as reported by a provider (ISO 4217, provider casing)
pub type CurrencyCode = String;
