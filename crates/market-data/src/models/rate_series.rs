use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::CurrencyCode;

/// A historical rate series returned by a provider.
///
/// `rates` maps each date to the rates quoted against `base` on that date.
/// A single response may carry several target codes (a "basket") even when
/// only one was requested.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RateSeries {
    /// Base currency the provider quoted against
    pub base: CurrencyCode,

    /// Date -> (target code -> rate)
    pub rates: BTreeMap<NaiveDate, BTreeMap<CurrencyCode, Decimal>>,
}

/// One (date, target, rate) triple flattened out of a [`RateSeries`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateObservation {
    pub date: NaiveDate,
    pub target: CurrencyCode,
    pub rate: Decimal,
}

impl RateSeries {
    pub fn new(base: impl Into<CurrencyCode>) -> Self {
        Self {
            base: base.into(),
            rates: BTreeMap::new(),
        }
    }

    /// Adds a single rate, replacing any previous value for the same date and code.
    pub fn insert(&mut self, date: NaiveDate, target: impl Into<CurrencyCode>, rate: Decimal) {
        self.rates
            .entry(date)
            .or_default()
            .insert(target.into(), rate);
    }

    pub fn is_empty(&self) -> bool {
        self.rates.values().all(|day| day.is_empty())
    }

    /// Number of distinct dates in the series.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Flattens the series into observations, ordered by date then code.
    pub fn observations(&self) -> Vec<RateObservation> {
        self.rates
            .iter()
            .flat_map(|(date, day)| {
                day.iter().map(move |(target, rate)| RateObservation {
                    date: *date,
                    target: target.clone(),
                    rate: *rate,
                })
            })
            .collect()
    }
}
