use super::forecast_model::{ForecastOutcome, ForecastRequest};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait defining the contract for forecast orchestration.
#[async_trait]
pub trait ForecastServiceTrait: Send + Sync {
    /// Resolves history for the request's pair and returns the scaled forecast.
    ///
    /// The request is expected to have passed [`ForecastRequest::validate`].
    async fn forecast(&self, request: &ForecastRequest) -> Result<ForecastOutcome>;
}
