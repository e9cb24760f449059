//! FX (Foreign Exchange) module - currencies, rate points, the rate store
//! contract and the cache reconciler.

pub mod currency;
mod fx_model;
mod fx_traits;
mod rate_reconciler;


pub use currency::normalize_currency_code;
pub use fx_model::{Currency, RatePoint};
pub use fx_traits::RateStoreTrait;
pub use rate_reconciler::{plan_fetch_windows, FetchWindow, RateReconciler};
