//! Rate provider trait definition.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::MarketDataError;
use crate::models::RateSeries;

/// Trait for historical exchange-rate providers.
///
/// Implementations perform a single outbound request per call. A non-success
/// response must be reported as [`MarketDataError::UpstreamFetch`] carrying
/// the response body. Providers do not retry and do not cache.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use ratecast_market_data::{MarketDataError, RateProvider, RateSeries};
///
/// struct StaticProvider;
///
/// #[async_trait]
/// impl RateProvider for StaticProvider {
///     fn id(&self) -> &'static str {
///         "STATIC"
///     }
///
///     async fn get_historical_rates(
///         &self,
///         base: &str,
///         _target: &str,
///         _start: NaiveDate,
///         _end: NaiveDate,
///     ) -> Result<RateSeries, MarketDataError> {
///         Ok(RateSeries::new(base))
///     }
/// }
/// ```
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch daily rates of `base` against `target` for `start..=end`.
    ///
    /// Dates on which the provider publishes nothing (weekends, market
    /// holidays) are simply absent from the returned series.
    async fn get_historical_rates(
        &self,
        base: &str,
        target: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RateSeries, MarketDataError>;
}
