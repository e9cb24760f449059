//! Wire models for the exchangerates-style `/history` endpoint.

use serde::Deserialize;
use std::collections::HashMap;

/// Response body of `GET /history`. The echoed `start_at`/`end_at` are ignored.
///
/// ```json
/// {
///   "base": "USD",
///   "start_at": "2024-01-01",
///   "end_at": "2024-01-05",
///   "rates": { "2024-01-02": { "EUR": 0.9131 } }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub(crate) struct HistoryResponse {
    pub base: String,
    #[serde(default)]
    pub rates: HashMap<String, HashMap<String, f64>>,
}
