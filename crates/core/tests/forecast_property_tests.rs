//! Property-based integration tests for the forecast horizon, the fetch
//! planner and the smoothing model.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;
use ratecast_core::forecast::{forecast_horizon, HoltWinters};
use ratecast_core::fx::{plan_fetch_windows, RatePoint};
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Generates a date between 2000-01-01 and roughly 2040.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..15_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

/// Generates a requested range and a cached interval inside it.
fn arb_range_with_cache() -> impl Strategy<Value = (NaiveDate, NaiveDate, Option<(NaiveDate, NaiveDate)>)>
{
    (arb_date(), 0u64..120, proptest::option::of((0u64..120, 0u64..120))).prop_map(
        |(from, span, cache)| {
            let to = from.checked_add_days(Days::new(span)).unwrap();
            let cache = cache.map(|(a, b)| {
                let a = a.min(span);
                let b = b.min(span);
                let (lo, hi) = (a.min(b), a.max(b));
                (
                    from.checked_add_days(Days::new(lo)).unwrap(),
                    from.checked_add_days(Days::new(hi)).unwrap(),
                )
            });
            (from, to, cache)
        },
    )
}

fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn days(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    from.iter_days().take_while(|d| *d <= to).collect()
}

fn cached_points(earliest: NaiveDate, latest: NaiveDate) -> Vec<RatePoint> {
    days(earliest, latest)
        .into_iter()
        .map(|d| RatePoint::new("usd", "eur", d, Decimal::ONE))
        .collect()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The horizon holds exactly the weekdays of the waiting window, ascending.
    #[test]
    fn prop_horizon_is_weekdays_of_window(start in arb_date(), waiting in 0u32..60) {
        let horizon = forecast_horizon(start, waiting);
        let end = start.checked_add_days(Days::new(u64::from(waiting))).unwrap();
        let expected: Vec<NaiveDate> = days(start, end).into_iter().filter(|d| is_weekday(*d)).collect();

        prop_assert_eq!(&horizon, &expected);
        prop_assert!(horizon.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(horizon.len() <= waiting as usize + 1);
    }

    /// Fetch windows stay inside the requested range and never overlap the
    /// cached interval; together they reach every weekday of the range.
    #[test]
    fn prop_fetch_windows_complement_cache((from, to, cache) in arb_range_with_cache()) {
        let cached = cache.map(|(lo, hi)| cached_points(lo, hi)).unwrap_or_default();
        let windows = plan_fetch_windows(&cached, from, to);
        let full_days = (to - from).num_days() + 1;

        for window in &windows {
            prop_assert!(window.start <= window.end);
            prop_assert!(window.start >= from && window.end <= to);
            if let Some((lo, hi)) = cache {
                prop_assert!(window.end < lo || window.start > hi);
                prop_assert!(window.days() < full_days);
            }
        }

        for day in days(from, to).into_iter().filter(|d| is_weekday(*d)) {
            let in_cache = cache.map(|(lo, hi)| day >= lo && day <= hi).unwrap_or(false);
            let in_window = windows.iter().any(|w| day >= w.start && day <= w.end);
            prop_assert!(in_cache || in_window, "{} is neither cached nor fetched", day);
        }
    }

    /// Without a cache the whole range is a single window.
    #[test]
    fn prop_empty_cache_fetches_whole_range((from, to, _) in arb_range_with_cache()) {
        let windows = plan_fetch_windows(&[], from, to);
        prop_assert_eq!(windows.len(), 1);
        prop_assert_eq!(windows[0].start, from);
        prop_assert_eq!(windows[0].end, to);
    }

    /// A constant series forecasts its own value for any horizon.
    #[test]
    fn prop_constant_series_forecasts_constant(
        value in 0.01f64..100.0,
        len in 10usize..60,
        steps in 0usize..15,
    ) {
        let series = vec![value; len];
        let model = HoltWinters::fit(&series, 5).unwrap();
        let forecast = model.forecast(steps);

        prop_assert_eq!(forecast.len(), steps);
        for predicted in forecast {
            prop_assert!((predicted - value).abs() < 1e-9 * value.max(1.0));
        }
    }
}
