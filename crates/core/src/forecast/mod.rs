//! Forecast module - business-day horizon, seasonal smoothing model and the
//! request orchestration that ties the reconciler to the forecaster.

mod business_days;
mod forecast_model;
mod forecast_service;
mod forecast_traits;
mod forecaster;
pub mod holt_winters;


pub use business_days::forecast_horizon;
pub use forecast_model::{ForecastOutcome, ForecastPoint, ForecastRequest, ForecastedRate};
pub use forecast_service::ForecastService;
pub use forecast_traits::ForecastServiceTrait;
pub use forecaster::Forecaster;
pub use holt_winters::{HoltWinters, HoltWintersParams};
