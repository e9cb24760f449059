use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A known currency. Created on first sight, never modified.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub id: i32,
    /// Normalized lowercase code, unique across the store
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// One daily rate of `base_currency` against `target_currency`.
///
/// Rate points are insert-only. Currency codes are always normalized
/// (see [`super::normalize_currency_code`]).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RatePoint {
    pub base_currency: String,
    pub target_currency: String,
    pub date: NaiveDate,
    pub rate: Decimal,
}

impl RatePoint {
    pub fn new(
        base_currency: impl Into<String>,
        target_currency: impl Into<String>,
        date: NaiveDate,
        rate: Decimal,
    ) -> Self {
        Self {
            base_currency: base_currency.into(),
            target_currency: target_currency.into(),
            date,
            rate,
        }
    }

    /// Whether this point belongs to the given (normalized) pair.
    pub fn is_pair(&self, base: &str, target: &str) -> bool {
        self.base_currency == base && self.target_currency == target
    }
}
