use std::time::Duration;

use ratecast_core::constants::DEFAULT_HISTORY_DAYS;
use ratecast_market_data::provider::exchange_rates_api::DEFAULT_BASE_URL;

pub struct Config {
    pub db_path: String,
    pub provider_url: String,
    pub provider_access_key: Option<String>,
    pub request_timeout: Duration,
    pub history_days: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = lookup("RATECAST_DB_PATH").unwrap_or_else(|| "./db/ratecast.db".into());
        let provider_url =
            lookup("RATECAST_PROVIDER_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let provider_access_key = lookup("RATECAST_PROVIDER_ACCESS_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        let timeout_ms: u64 = lookup("RATECAST_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(30000);
        let history_days: u64 = lookup("RATECAST_HISTORY_DAYS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_HISTORY_DAYS);
        Self {
            db_path,
            provider_url,
            provider_access_key,
            request_timeout: Duration::from_millis(timeout_ms),
            history_days,
        }
    }
}
