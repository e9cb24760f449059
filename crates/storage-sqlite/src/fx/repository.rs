use super::model::{CurrencyDB, ExchangeRateDB, NewCurrencyDB, NewExchangeRateDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::{currency, exchange_rate};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use log::debug;
use ratecast_core::errors::{DatabaseError, Error};
use ratecast_core::fx::{Currency, RatePoint, RateStoreTrait};
use ratecast_core::Result;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

// Keeps `IN (...)` lists and multi-row inserts under SQLite's parameter limit.
const NAME_CHUNK: usize = 500;
const INSERT_CHUNK: usize = 1_000;

/// SQLite-backed rate cache.
///
/// Reads go through the pool; every write goes through the single writer so
/// currencies and their rates land in one transaction.
#[derive(Clone)]
pub struct FxRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl FxRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    fn find_currency_id(conn: &mut SqliteConnection, name: &str) -> Result<Option<i32>> {
        currency::table
            .filter(currency::name.eq(name))
            .select(currency::id)
            .first::<i32>(conn)
            .optional()
            .into_core()
    }
}

/// Get-or-create the named currencies on `conn`, returning them by name.
///
/// Known names are left untouched, so their timestamps keep the first sighting.
fn ensure_currencies_in(
    conn: &mut SqliteConnection,
    names: &[String],
) -> Result<HashMap<String, CurrencyDB>> {
    let unique: Vec<String> = names
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if unique.is_empty() {
        return Ok(HashMap::new());
    }

    let now = Utc::now().naive_utc();
    let new_rows: Vec<NewCurrencyDB> = unique
        .iter()
        .map(|name| NewCurrencyDB::new(name.clone(), now))
        .collect();

    let mut created = 0;
    for chunk in new_rows.chunks(NAME_CHUNK) {
        created += diesel::insert_or_ignore_into(currency::table)
            .values(chunk)
            .execute(conn)
            .map_err(StorageError::from)?;
    }
    if created > 0 {
        debug!("Created {} new currencies", created);
    }

    let mut by_name = HashMap::with_capacity(unique.len());
    for chunk in unique.chunks(NAME_CHUNK) {
        let rows = currency::table
            .filter(currency::name.eq_any(chunk))
            .select(CurrencyDB::as_select())
            .load::<CurrencyDB>(conn)
            .map_err(StorageError::from)?;
        by_name.extend(rows.into_iter().map(|row| (row.name.clone(), row)));
    }
    Ok(by_name)
}

fn currency_id(by_name: &HashMap<String, CurrencyDB>, name: &str) -> Result<i32> {
    by_name.get(name).map(|c| c.id).ok_or_else(|| {
        Error::Database(DatabaseError::NotFound(format!("Currency '{}'", name)))
    })
}

fn insert_rates_in(
    conn: &mut SqliteConnection,
    rates: &[RatePoint],
    now: NaiveDateTime,
) -> Result<usize> {
    let names: Vec<String> = rates
        .iter()
        .flat_map(|r| [r.base_currency.clone(), r.target_currency.clone()])
        .collect();
    let by_name = ensure_currencies_in(conn, &names)?;

    let rows = rates
        .iter()
        .map(|point| {
            Ok(NewExchangeRateDB::new(
                currency_id(&by_name, &point.base_currency)?,
                currency_id(&by_name, &point.target_currency)?,
                point,
                now,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut inserted = 0;
    for chunk in rows.chunks(INSERT_CHUNK) {
        // An existing (pair, date) row is authoritative
        inserted += diesel::insert_or_ignore_into(exchange_rate::table)
            .values(chunk)
            .execute(conn)
            .map_err(StorageError::from)?;
    }
    Ok(inserted)
}

#[async_trait]
impl RateStoreTrait for FxRepository {
    fn get_currencies(&self) -> Result<Vec<Currency>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = currency::table
            .order(currency::name.asc())
            .select(CurrencyDB::as_select())
            .load::<CurrencyDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Currency::from).collect())
    }

    fn get_rates_in_range(
        &self,
        base: &str,
        target: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RatePoint>> {
        let mut conn = get_connection(&self.pool)?;

        let (base_id, target_id) = match (
            Self::find_currency_id(&mut conn, base)?,
            Self::find_currency_id(&mut conn, target)?,
        ) {
            (Some(base_id), Some(target_id)) => (base_id, target_id),
            _ => return Ok(Vec::new()),
        };

        let rows = exchange_rate::table
            .filter(exchange_rate::base_currency_id.eq(base_id))
            .filter(exchange_rate::target_currency_id.eq(target_id))
            .filter(exchange_rate::date.ge(from))
            .filter(exchange_rate::date.le(to))
            .order((exchange_rate::date.asc(), exchange_rate::id.asc()))
            .select(ExchangeRateDB::as_select())
            .load::<ExchangeRateDB>(&mut conn)
            .into_core()?;

        rows.into_iter()
            .map(|row| row.into_rate_point(base, target))
            .collect()
    }

    async fn ensure_currencies(&self, names: &[String]) -> Result<Vec<Currency>> {
        let names = names.to_vec();
        let by_name = self
            .writer
            .exec(move |conn| ensure_currencies_in(conn, &names))
            .await?;

        let mut currencies: Vec<Currency> = by_name.into_values().map(Currency::from).collect();
        currencies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(currencies)
    }

    async fn insert_rates(&self, rates: &[RatePoint]) -> Result<usize> {
        if rates.is_empty() {
            return Ok(0);
        }

        let rates = rates.to_vec();
        let now = Utc::now().naive_utc();
        self.writer
            .exec(move |conn| insert_rates_in(conn, &rates, now))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, init, run_migrations, spawn_writer};
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    async fn create_test_repository() -> (FxRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db").to_string_lossy().to_string();

        init(&db_path).expect("Failed to init database");
        let pool = create_pool(&db_path).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());

        (FxRepository::new(pool, writer), temp_dir)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn test_ensure_currencies_is_get_or_create() {
        let (repo, _temp_dir) = create_test_repository().await;

        let first = repo.ensure_currencies(&names(&["usd", "eur", "usd"])).await.unwrap();
        assert_eq!(first.len(), 2);

        let second = repo.ensure_currencies(&names(&["eur", "gbp"])).await.unwrap();
        assert_eq!(second.len(), 2);
        let eur_first = first.iter().find(|c| c.name == "eur").unwrap();
        let eur_second = second.iter().find(|c| c.name == "eur").unwrap();
        assert_eq!(eur_first, eur_second);

        let all: Vec<String> = repo
            .get_currencies()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(all, names(&["eur", "gbp", "usd"]));
    }

    #[tokio::test]
    async fn test_insert_and_read_back_in_date_order() {
        let (repo, _temp_dir) = create_test_repository().await;
        let points = vec![
            RatePoint::new("usd", "eur", date(2024, 1, 3), dec!(0.9123456789)),
            RatePoint::new("usd", "eur", date(2024, 1, 1), dec!(0.91)),
            RatePoint::new("usd", "eur", date(2024, 1, 2), dec!(0.915)),
        ];

        assert_eq!(repo.insert_rates(&points).await.unwrap(), 3);

        let read = repo
            .get_rates_in_range("usd", "eur", date(2024, 1, 1), date(2024, 1, 3))
            .unwrap();
        let dates: Vec<NaiveDate> = read.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]);
        assert_eq!(read[2].rate, dec!(0.9123456789));
    }

    #[tokio::test]
    async fn test_range_bounds_are_inclusive_and_pair_specific() {
        let (repo, _temp_dir) = create_test_repository().await;
        let points = vec![
            RatePoint::new("usd", "eur", date(2024, 1, 1), dec!(0.91)),
            RatePoint::new("usd", "eur", date(2024, 1, 5), dec!(0.92)),
            RatePoint::new("usd", "eur", date(2024, 1, 8), dec!(0.93)),
            RatePoint::new("usd", "gbp", date(2024, 1, 5), dec!(0.79)),
            RatePoint::new("eur", "usd", date(2024, 1, 5), dec!(1.08)),
        ];
        repo.insert_rates(&points).await.unwrap();

        let read = repo
            .get_rates_in_range("usd", "eur", date(2024, 1, 1), date(2024, 1, 5))
            .unwrap();
        assert_eq!(read, points[..2].to_vec());
    }

    #[tokio::test]
    async fn test_existing_point_is_kept_on_duplicate_insert() {
        let (repo, _temp_dir) = create_test_repository().await;
        let original = RatePoint::new("usd", "eur", date(2024, 1, 2), dec!(0.91));
        let duplicate = RatePoint::new("usd", "eur", date(2024, 1, 2), dec!(0.99));

        assert_eq!(repo.insert_rates(&[original.clone()]).await.unwrap(), 1);
        assert_eq!(repo.insert_rates(&[duplicate]).await.unwrap(), 0);

        let read = repo
            .get_rates_in_range("usd", "eur", date(2024, 1, 1), date(2024, 1, 31))
            .unwrap();
        assert_eq!(read, vec![original]);
    }

    #[tokio::test]
    async fn test_insert_creates_unknown_currencies() {
        let (repo, _temp_dir) = create_test_repository().await;
        repo.insert_rates(&[RatePoint::new("usd", "chf", date(2024, 1, 2), dec!(0.88))])
            .await
            .unwrap();

        let all: Vec<String> = repo
            .get_currencies()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(all, names(&["chf", "usd"]));
    }

    #[tokio::test]
    async fn test_unknown_pair_reads_empty() {
        let (repo, _temp_dir) = create_test_repository().await;
        let read = repo
            .get_rates_in_range("usd", "jpy", date(2024, 1, 1), date(2024, 1, 31))
            .unwrap();
        assert!(read.is_empty());
        assert_eq!(repo.insert_rates(&[]).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_large_batch_is_chunked() {
        let (repo, _temp_dir) = create_test_repository().await;
        let start = date(2000, 1, 1);
        let points: Vec<RatePoint> = (0..2_500u64)
            .map(|i| {
                RatePoint::new(
                    "usd",
                    "eur",
                    start + chrono::Days::new(i),
                    dec!(1) + rust_decimal::Decimal::from(i) / dec!(100000),
                )
            })
            .collect();

        assert_eq!(repo.insert_rates(&points).await.unwrap(), 2_500);
        let read = repo
            .get_rates_in_range("usd", "eur", start, start + chrono::Days::new(2_499))
            .unwrap();
        assert_eq!(read.len(), 2_500);
    }
}
