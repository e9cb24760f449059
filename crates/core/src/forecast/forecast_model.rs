use crate::constants::{DATE_FORMAT, DEFAULT_MAX_WAITING_DAYS, MAX_START_DATE_LEAD_DAYS};
use crate::errors::{Result, ValidationError};
use crate::utils::time_utils::{days_before, is_business_day};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A request to forecast `amount` of `base_currency` in `target_currency`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRequest {
    pub base_currency: String,
    pub target_currency: String,
    pub amount: Decimal,
    pub start_date: NaiveDate,
    /// Calendar days after `start_date` covered by the forecast.
    pub max_waiting_time: u32,
}

impl ForecastRequest {
    pub fn new(
        base_currency: impl Into<String>,
        target_currency: impl Into<String>,
        amount: Decimal,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            base_currency: base_currency.into(),
            target_currency: target_currency.into(),
            amount,
            start_date,
            max_waiting_time: DEFAULT_MAX_WAITING_DAYS,
        }
    }

    pub fn with_max_waiting_time(mut self, days: u32) -> Self {
        self.max_waiting_time = days;
        self
    }

    /// Checks the request the way the entry form does, relative to `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        if self.base_currency.trim().is_empty() {
            return Err(ValidationError::MissingField("base_currency".to_string()).into());
        }
        if self.target_currency.trim().is_empty() {
            return Err(ValidationError::MissingField("target_currency".to_string()).into());
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Amount must be positive, got {}",
                self.amount
            ))
            .into());
        }
        if !is_business_day(self.start_date) {
            return Err(ValidationError::InvalidInput(format!(
                "Start date {} falls on a weekend",
                self.start_date
            ))
            .into());
        }
        let lead = (self.start_date - today).num_days();
        if lead > MAX_START_DATE_LEAD_DAYS {
            return Err(ValidationError::InvalidInput(format!(
                "Start date {} is {} days ahead; at most {} days are allowed",
                self.start_date, lead, MAX_START_DATE_LEAD_DAYS
            ))
            .into());
        }
        Ok(())
    }

    /// First day of the history window ending at the start date.
    pub fn history_start(&self, history_days: u64) -> NaiveDate {
        days_before(self.start_date, history_days)
    }
}

/// A predicted rate for one business day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastedRate {
    pub date: NaiveDate,
    pub rate: f64,
}

/// A presentation-ready forecast point, scaled by the request amount.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub value: f64,
}

impl ForecastPoint {
    pub fn from_rate(rate: &ForecastedRate, amount: f64) -> Self {
        Self {
            date: rate.date.format(DATE_FORMAT).to_string(),
            value: rate.rate * amount,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastOutcome {
    /// Code the values are expressed in.
    pub currency: String,
    pub points: Vec<ForecastPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(start: NaiveDate) -> ForecastRequest {
        ForecastRequest::new("usd", "eur", dec!(100), start)
    }

    #[test]
    fn test_defaults_to_five_days_waiting() {
        assert_eq!(request(date(2024, 3, 4)).max_waiting_time, 5);
        assert_eq!(
            request(date(2024, 3, 4)).with_max_waiting_time(9).max_waiting_time,
            9
        );
    }

    #[test]
    fn test_valid_request() {
        let today = date(2024, 3, 1);
        assert!(request(date(2024, 3, 4)).validate(today).is_ok());
        // Past start dates are allowed
        assert!(request(date(2024, 1, 2)).validate(today).is_ok());
        // Last weekday within the 50 day lead
        assert!(request(date(2024, 4, 19)).validate(today).is_ok());
    }

    #[test]
    fn test_weekend_start_is_rejected() {
        let err = request(date(2024, 3, 9)).validate(date(2024, 3, 1)).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::InvalidInput(_))));
    }

    #[test]
    fn test_start_too_far_ahead_is_rejected() {
        // 2024-04-22 is a Monday, 52 days after 2024-03-01
        let err = request(date(2024, 4, 22)).validate(date(2024, 3, 1)).unwrap_err();
        assert!(err.to_string().contains("at most 50 days"));
    }

    #[test]
    fn test_non_positive_amount_is_rejected() {
        let mut req = request(date(2024, 3, 4));
        req.amount = dec!(0);
        assert!(req.validate(date(2024, 3, 1)).is_err());
        req.amount = dec!(-5);
        assert!(req.validate(date(2024, 3, 1)).is_err());
    }

    #[test]
    fn test_missing_currency_is_rejected() {
        let mut req = request(date(2024, 3, 4));
        req.target_currency = "  ".to_string();
        let err = req.validate(date(2024, 3, 1)).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::MissingField(_))));
    }

    #[test]
    fn test_history_start() {
        assert_eq!(request(date(2024, 3, 4)).history_start(60), date(2024, 1, 4));
    }

    #[test]
    fn test_forecast_point_serialization() {
        let point = ForecastPoint::from_rate(
            &ForecastedRate {
                date: date(2024, 3, 4),
                rate: 0.5,
            },
            10.0,
        );
        let outcome = ForecastOutcome {
            currency: "eur".to_string(),
            points: vec![point],
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(
            json,
            r#"{"currency":"eur","points":[{"date":"2024-03-04","value":5.0}]}"#
        );
    }
}
