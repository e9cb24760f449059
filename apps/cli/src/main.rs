mod cli;
mod config;
mod main_lib;
mod output;

use clap::Parser;
use ratecast_core::forecast::ForecastServiceTrait;
use ratecast_core::utils::time_utils::today_utc;

use cli::Cli;
use config::Config;
use main_lib::{build_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_tracing();

    let request = cli.to_request();
    request.validate(today_utc())?;

    let state = build_state(&config).await?;
    tracing::debug!("Forecasting against {}", state.db_path);

    let outcome = state.forecast_service.forecast(&request).await?;
    println!("{}", output::render(&outcome, cli.json)?);
    Ok(())
}
