//! Database models for currencies and exchange rates.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use ratecast_core::fx::{Currency, RatePoint};
use ratecast_core::Result;

#[derive(Queryable, Identifiable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::currency)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CurrencyDB {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::currency)]
pub struct NewCurrencyDB {
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewCurrencyDB {
    pub fn new(name: impl Into<String>, now: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<CurrencyDB> for Currency {
    fn from(db: CurrencyDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

/// Database model for a daily rate. The rate is stored as a decimal string.
#[derive(Queryable, Identifiable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::exchange_rate)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExchangeRateDB {
    pub id: i32,
    pub base_currency_id: i32,
    pub target_currency_id: i32,
    pub rate: String,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ExchangeRateDB {
    /// Converts the row into a domain point carrying the pair's codes.
    pub fn into_rate_point(self, base: &str, target: &str) -> Result<RatePoint> {
        let rate = Decimal::from_str(&self.rate)?;
        Ok(RatePoint::new(base, target, self.date, rate))
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::exchange_rate)]
pub struct NewExchangeRateDB {
    pub base_currency_id: i32,
    pub target_currency_id: i32,
    pub rate: String,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewExchangeRateDB {
    pub fn new(
        base_currency_id: i32,
        target_currency_id: i32,
        point: &RatePoint,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            base_currency_id,
            target_currency_id,
            rate: point.rate.to_string(),
            date: point.date,
            created_at: now,
            updated_at: now,
        }
    }
}
