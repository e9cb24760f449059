use super::currency::{normalize_currency_code, same_currency};
use super::fx_model::RatePoint;
use super::fx_traits::RateStoreTrait;
use crate::constants::RATE_DECIMAL_PLACES;
use crate::errors::{Error, Result, ValidationError};
use crate::utils::time_utils::{roll_back_to_business_day, roll_forward_to_business_day};
use chrono::NaiveDate;
use log::{debug, info};
use ratecast_market_data::RateProvider;
use std::collections::HashSet;
use std::sync::Arc;

/// An inclusive date range the reconciler asks the provider for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FetchWindow {
    /// Number of calendar days covered, both ends included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Computes which parts of `[from, to]` must be fetched given the cached points.
///
/// Coverage is the interval between the earliest and latest cached date. The
/// requested bounds are first narrowed to business days, since the provider
/// never publishes weekend rates. With an empty cache the whole range is one
/// window; otherwise a leading gap `[from, earliest)` and a trailing gap
/// `(latest, to]` are reported independently. Gaps inside the cached interval
/// are not detected.
pub fn plan_fetch_windows(cached: &[RatePoint], from: NaiveDate, to: NaiveDate) -> Vec<FetchWindow> {
    if from > to {
        return Vec::new();
    }

    let (earliest, latest) = match (
        cached.iter().map(|p| p.date).min(),
        cached.iter().map(|p| p.date).max(),
    ) {
        (Some(earliest), Some(latest)) => (earliest, latest),
        _ => return vec![FetchWindow { start: from, end: to }],
    };

    let first_business = roll_forward_to_business_day(from);
    let last_business = roll_back_to_business_day(to);

    let mut windows = Vec::with_capacity(2);
    if earliest > first_business {
        if let Some(end) = earliest.pred_opt() {
            windows.push(FetchWindow { start: from, end });
        }
    }
    if latest < last_business {
        if let Some(start) = latest.succ_opt() {
            windows.push(FetchWindow { start, end: to });
        }
    }
    windows
}

/// Resolves a rate series for a currency pair, filling cache gaps from the provider.
///
/// The reconciler owns no state of its own: the store is the cache and the
/// provider is the source of truth for anything missing.
pub struct RateReconciler {
    store: Arc<dyn RateStoreTrait>,
    provider: Arc<dyn RateProvider>,
}

impl RateReconciler {
    pub fn new(store: Arc<dyn RateStoreTrait>, provider: Arc<dyn RateProvider>) -> Self {
        Self { store, provider }
    }

    /// Returns every available rate for `base`/`target` in `[from, to]`,
    /// ascending by date, fetching and persisting whatever the cache lacks.
    ///
    /// Provider responses may carry other target codes; those points are
    /// persisted under their own code but only `target` points are returned.
    /// A fetched point whose date is already cached is discarded. Fetched rates
    /// are rounded to the stored precision. Currencies are created only
    /// alongside fetched rates, so if any fetch fails nothing is written.
    pub async fn resolve(
        &self,
        base: &str,
        target: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RatePoint>> {
        if from > to {
            return Err(ValidationError::InvalidInput(format!(
                "Rate range start {} is after end {}",
                from, to
            ))
            .into());
        }

        let base = normalize_currency_code(base);
        let target = normalize_currency_code(target);

        let cached = self.store.get_rates_in_range(&base, &target, from, to)?;
        let windows = plan_fetch_windows(&cached, from, to);

        if windows.is_empty() {
            debug!(
                "Cache covers {}/{} {}..={} ({} points)",
                base,
                target,
                from,
                to,
                cached.len()
            );
            return Ok(sorted_by_date(cached));
        }

        let mut fetched = Vec::new();
        for window in &windows {
            info!(
                "Fetching {}/{} {}..={} from {}",
                base,
                target,
                window.start,
                window.end,
                self.provider.id()
            );
            let series = self
                .provider
                .get_historical_rates(&base, &target, window.start, window.end)
                .await?;

            if !same_currency(&series.base, &base) {
                return Err(Error::InvalidExchangeRate(format!(
                    "Provider {} quoted base {} for a {} request",
                    self.provider.id(),
                    series.base,
                    base
                )));
            }

            fetched.extend(series.observations().into_iter().map(|obs| {
                RatePoint::new(
                    base.clone(),
                    normalize_currency_code(&obs.target),
                    obs.date,
                    obs.rate.round_dp(RATE_DECIMAL_PLACES),
                )
            }));
        }

        let cached_dates: HashSet<NaiveDate> = cached.iter().map(|p| p.date).collect();
        let mut seen: HashSet<(String, NaiveDate)> = HashSet::new();
        let to_insert: Vec<RatePoint> = fetched
            .into_iter()
            .filter(|p| !(p.target_currency == target && cached_dates.contains(&p.date)))
            .filter(|p| seen.insert((p.target_currency.clone(), p.date)))
            .collect();

        let inserted = if to_insert.is_empty() {
            0
        } else {
            self.store.insert_rates(&to_insert).await?
        };
        debug!(
            "Persisted {} of {} fetched points for {}/{}",
            inserted,
            to_insert.len(),
            base,
            target
        );

        let mut merged = cached;
        merged.extend(
            to_insert
                .into_iter()
                .filter(|p| p.is_pair(&base, &target) && p.date >= from && p.date <= to),
        );
        Ok(sorted_by_date(merged))
    }
}

fn sorted_by_date(mut points: Vec<RatePoint>) -> Vec<RatePoint> {
    points.sort_by_key(|p| p.date);
    points
}
