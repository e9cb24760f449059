//! Command-line arguments for `ratecast`.
//!
//! ```bash
//! ratecast --base USD --target EUR --amount 1000 --start-date 2024-03-04
//! ratecast --base usd --target gbp --amount 50 --start-date 2024-03-04 --max-waiting-time 10 --json
//! ```

use chrono::NaiveDate;
use clap::Parser;
use ratecast_core::constants::DEFAULT_MAX_WAITING_DAYS;
use ratecast_core::forecast::ForecastRequest;
use rust_decimal::Decimal;

/// Forecast what an amount of one currency will be worth in another over
/// the coming business days.
#[derive(Debug, Parser)]
#[command(name = "ratecast", author, version, about)]
pub struct Cli {
    /// Currency the amount is held in.
    #[arg(long)]
    pub base: String,

    /// Currency to convert into.
    #[arg(long)]
    pub target: String,

    /// Amount of the base currency.
    #[arg(long)]
    pub amount: Decimal,

    /// First business day to forecast (YYYY-MM-DD), at most 50 days ahead.
    #[arg(long)]
    pub start_date: NaiveDate,

    /// Calendar days after the start date covered by the forecast.
    #[arg(long, default_value_t = DEFAULT_MAX_WAITING_DAYS)]
    pub max_waiting_time: u32,

    /// Print the forecast as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Cli {
    pub fn to_request(&self) -> ForecastRequest {
        ForecastRequest::new(
            self.base.clone(),
            self.target.clone(),
            self.amount,
            self.start_date,
        )
        .with_max_waiting_time(self.max_waiting_time)
    }
}
