use super::forecast_model::{ForecastOutcome, ForecastPoint, ForecastRequest};
use super::forecast_traits::ForecastServiceTrait;
use super::forecaster::Forecaster;
use crate::constants::DEFAULT_HISTORY_DAYS;
use crate::errors::{Result, ValidationError};
use crate::fx::{normalize_currency_code, RateReconciler};
use async_trait::async_trait;
use log::info;
use num_traits::ToPrimitive;

/// Resolves a history window ending at the start date and forecasts from it.
pub struct ForecastService {
    reconciler: RateReconciler,
    forecaster: Forecaster,
    history_days: u64,
}

impl ForecastService {
    pub fn new(reconciler: RateReconciler) -> Self {
        Self {
            reconciler,
            forecaster: Forecaster::default(),
            history_days: DEFAULT_HISTORY_DAYS,
        }
    }

    /// Calendar days of history resolved before the start date.
    pub fn with_history_days(mut self, history_days: u64) -> Self {
        self.history_days = history_days;
        self
    }
}

#[async_trait]
impl ForecastServiceTrait for ForecastService {
    async fn forecast(&self, request: &ForecastRequest) -> Result<ForecastOutcome> {
        let amount = request.amount.to_f64().ok_or_else(|| {
            ValidationError::InvalidInput(format!(
                "Amount {} is not representable as a float",
                request.amount
            ))
        })?;

        let history_start = request.history_start(self.history_days);
        let history = self
            .reconciler
            .resolve(
                &request.base_currency,
                &request.target_currency,
                history_start,
                request.start_date,
            )
            .await?;

        let rates = self.forecaster.forecast(
            &history,
            request.start_date,
            request.max_waiting_time,
        )?;

        info!(
            "Forecast {}/{} from {}: {} history points, {} predictions",
            request.base_currency,
            request.target_currency,
            request.start_date,
            history.len(),
            rates.len()
        );

        Ok(ForecastOutcome {
            currency: normalize_currency_code(&request.target_currency),
            points: rates
                .iter()
                .map(|rate| ForecastPoint::from_rate(rate, amount))
                .collect(),
        })
    }
}
