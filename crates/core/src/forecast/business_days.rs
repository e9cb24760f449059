use crate::utils::time_utils::{get_days_between, is_business_day};
use chrono::{Days, NaiveDate};

/// Business days to forecast for a start date and waiting period.
///
/// Scans `max_waiting_days + 1` calendar days starting at `start` (inclusive)
/// and keeps Monday through Friday, in ascending order.
pub fn forecast_horizon(start: NaiveDate, max_waiting_days: u32) -> Vec<NaiveDate> {
    let end = start
        .checked_add_days(Days::new(u64::from(max_waiting_days)))
        .unwrap_or(NaiveDate::MAX);

    get_days_between(start, end)
        .into_iter()
        .filter(|day| is_business_day(*day))
        .collect()
}
