use super::business_days::forecast_horizon;
use super::forecast_model::ForecastedRate;
use super::holt_winters::HoltWinters;
use crate::constants::SEASONAL_PERIOD;
use crate::errors::{Error, Result};
use crate::fx::RatePoint;
use crate::utils::time_utils::days_before;
use chrono::NaiveDate;
use log::debug;
use num_traits::ToPrimitive;

/// Turns a historical rate series into business-day predictions.
#[derive(Debug, Clone)]
pub struct Forecaster {
    seasonal_period: usize,
}

impl Default for Forecaster {
    fn default() -> Self {
        Self::new(SEASONAL_PERIOD)
    }
}

impl Forecaster {
    pub fn new(seasonal_period: usize) -> Self {
        Self { seasonal_period }
    }

    /// Converts rate points into a daily numeric series ending at `start_date`.
    ///
    /// Values keep their order; dates are reassigned one calendar day apart
    /// counting backward from `start_date`, whatever the underlying dates were.
    pub fn prepare_series(
        points: &[RatePoint],
        start_date: NaiveDate,
    ) -> Result<Vec<(NaiveDate, f64)>> {
        let last = points.len().saturating_sub(1);
        points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let value = point.rate.to_f64().ok_or_else(|| {
                    Error::InvalidExchangeRate(format!(
                        "Rate {} on {} is not representable as a float",
                        point.rate, point.date
                    ))
                })?;
                Ok((days_before(start_date, (last - i) as u64), value))
            })
            .collect()
    }

    /// Predicts one rate per business day in the waiting window.
    ///
    /// An empty series or an empty horizon yields an empty result without
    /// fitting the model.
    pub fn forecast(
        &self,
        series: &[RatePoint],
        start_date: NaiveDate,
        max_waiting_days: u32,
    ) -> Result<Vec<ForecastedRate>> {
        if series.is_empty() {
            return Ok(Vec::new());
        }

        let horizon = forecast_horizon(start_date, max_waiting_days);
        if horizon.is_empty() {
            return Ok(Vec::new());
        }

        let prepared = Self::prepare_series(series, start_date)?;
        let values: Vec<f64> = prepared.iter().map(|(_, value)| *value).collect();

        let model = HoltWinters::fit(&values, self.seasonal_period)?;
        let predictions = model.forecast(horizon.len());

        debug!(
            "Forecast {} business days from {} using {} observations (sse={:.6})",
            horizon.len(),
            start_date,
            values.len(),
            model.sse()
        );

        Ok(horizon
            .into_iter()
            .zip(predictions)
            .map(|(date, rate)| ForecastedRate { date, rate })
            .collect())
    }
}
