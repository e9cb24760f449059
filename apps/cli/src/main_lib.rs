use std::sync::Arc;

use ratecast_core::forecast::{ForecastService, ForecastServiceTrait};
use ratecast_core::fx::{RateReconciler, RateStoreTrait};
use ratecast_market_data::{ExchangeRatesApiProvider, RateProvider};
use ratecast_storage_sqlite::{db, FxRepository};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub forecast_service: Arc<dyn ForecastServiceTrait>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("RATECAST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout carries only the forecast
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let store: Arc<dyn RateStoreTrait> = Arc::new(FxRepository::new(pool.clone(), writer));
    let provider: Arc<dyn RateProvider> = Arc::new(
        ExchangeRatesApiProvider::with_timeout(config.provider_url.clone(), config.request_timeout)
            .with_access_key(config.provider_access_key.clone()),
    );
    tracing::info!(
        "Rate provider {} at {}",
        provider.id(),
        config.provider_url
    );

    let forecast_service = ForecastService::new(RateReconciler::new(store, provider))
        .with_history_days(config.history_days);

    Ok(AppState {
        forecast_service: Arc::new(forecast_service),
        db_path,
    })
}
