//! FX storage - currencies and daily exchange rates.

mod model;
mod repository;

pub use model::{CurrencyDB, ExchangeRateDB, NewCurrencyDB, NewExchangeRateDB};
pub use repository::FxRepository;
