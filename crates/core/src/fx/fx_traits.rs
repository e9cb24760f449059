use super::fx_model::{Currency, RatePoint};
use crate::errors::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait defining the contract for the persisted rate cache.
///
/// All currency arguments are normalized codes. Writes are insert-only.
#[async_trait]
pub trait RateStoreTrait: Send + Sync {
    /// Every known currency, ordered by name.
    fn get_currencies(&self) -> Result<Vec<Currency>>;

    /// Rate points for the pair with `from <= date <= to`, ascending by date.
    ///
    /// Duplicate points for the same date may be returned if they were
    /// inserted concurrently; callers must tolerate them.
    fn get_rates_in_range(
        &self,
        base: &str,
        target: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RatePoint>>;

    /// Get-or-create every named currency, returning the matching rows.
    async fn ensure_currencies(&self, names: &[String]) -> Result<Vec<Currency>>;

    /// Bulk insert rate points in one atomic write, creating any currency not
    /// yet known. Returns the number of rows written.
    async fn insert_rates(&self, rates: &[RatePoint]) -> Result<usize>;
}
