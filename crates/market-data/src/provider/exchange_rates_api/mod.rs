//! Exchangerates-style HTTP provider.
//!
//! Fetches historical daily rates from a `/history` endpoint parameterized by
//! `start_at`, `end_at`, `symbols` and `base`, as served by
//! api.exchangeratesapi.io and its self-hosted clones.

mod models;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::Client;
use rust_decimal::Decimal;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::RateSeries;
use crate::provider::RateProvider;

use models::HistoryResponse;

/// Provider ID constant
const PROVIDER_ID: &str = "EXCHANGE_RATES_API";

/// Default public endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.exchangeratesapi.io";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Historical exchange-rate provider backed by a `/history` HTTP endpoint.
///
/// # Example
///
/// ```ignore
/// use ratecast_market_data::ExchangeRatesApiProvider;
///
/// let provider = ExchangeRatesApiProvider::new("https://api.exchangeratesapi.io")
///     .with_access_key(Some("key".to_string()));
/// ```
pub struct ExchangeRatesApiProvider {
    client: Client,
    base_url: String,
    access_key: Option<String>,
}

impl ExchangeRatesApiProvider {
    /// Create a provider against `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Create a provider against `base_url` with a custom request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_key: None,
        }
    }

    /// Attach an API access key, sent as the `access_key` query parameter.
    pub fn with_access_key(mut self, access_key: Option<String>) -> Self {
        self.access_key = access_key.filter(|k| !k.trim().is_empty());
        self
    }

    /// Builds the `/history` URL. Currency codes are sent uppercase.
    fn build_url(&self, base: &str, target: &str, start: NaiveDate, end: NaiveDate) -> String {
        let mut url = format!(
            "{}/history?start_at={}&end_at={}&symbols={}&base={}",
            self.base_url,
            start.format(DATE_FORMAT),
            end.format(DATE_FORMAT),
            urlencoding::encode(&target.trim().to_uppercase()),
            urlencoding::encode(&base.trim().to_uppercase()),
        );
        if let Some(key) = &self.access_key {
            url.push_str("&access_key=");
            url.push_str(&urlencoding::encode(key));
        }
        url
    }

    /// Parses a successful `/history` body into a [`RateSeries`].
    fn parse_history(body: &str) -> Result<RateSeries, MarketDataError> {
        let response: HistoryResponse =
            serde_json::from_str(body).map_err(|e| MarketDataError::ValidationFailed {
                message: format!("Unreadable history response: {}", e),
            })?;

        let mut series = RateSeries::new(response.base);
        for (day, day_rates) in response.rates {
            let date = NaiveDate::parse_from_str(&day, DATE_FORMAT).map_err(|e| {
                MarketDataError::ValidationFailed {
                    message: format!("Invalid date '{}' in history response: {}", day, e),
                }
            })?;
            for (code, value) in day_rates {
                let rate = Decimal::try_from(value).map_err(|_| {
                    MarketDataError::ValidationFailed {
                        message: format!("Invalid rate {} for {} on {}", value, code, day),
                    }
                })?;
                series.insert(date, code, rate);
            }
        }

        Ok(series)
    }
}

#[async_trait]
impl RateProvider for ExchangeRatesApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_historical_rates(
        &self,
        base: &str,
        target: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RateSeries, MarketDataError> {
        if start > end {
            return Err(MarketDataError::InvalidDateRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let url = self.build_url(base, target, start, end);
        debug!(
            "Fetching {}/{} history {}..={} from {}",
            base, target, start, end, self.base_url
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })?;

        if !status.is_success() {
            warn!(
                "{} rejected {}/{} history request with {}",
                PROVIDER_ID, base, target, status
            );
            return Err(MarketDataError::UpstreamFetch {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let series = Self::parse_history(&body)?;
        debug!(
            "{} returned {} dated entries for {}/{}",
            PROVIDER_ID,
            series.len(),
            base,
            target
        );
        Ok(series)
    }
}
