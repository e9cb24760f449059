/// Calendar days of history resolved before the forecast start date.
pub const DEFAULT_HISTORY_DAYS: u64 = 60;

/// Seasonal period of the smoothing model (one business week).
pub const SEASONAL_PERIOD: usize = 5;

/// Furthest a forecast start date may lie after today, in calendar days.
pub const MAX_START_DATE_LEAD_DAYS: i64 = 50;

/// Waiting period used when the caller does not provide one.
pub const DEFAULT_MAX_WAITING_DAYS: u32 = 5;

/// Fractional digits kept for a fetched rate.
pub const RATE_DECIMAL_PLACES: u32 = 10;

/// Date format used on every external surface.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
