//! Core error types for the Ratecast application.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer,
//! and provider errors are converted here so that an upstream rejection always
//! surfaces as [`Error::UpstreamFetch`].

use chrono::ParseError as ChronoParseError;
use ratecast_market_data::MarketDataError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the forecasting core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    /// The rate provider answered with a non-success status. Nothing was written.
    #[error("Upstream fetch failed ({status}): {payload}")]
    UpstreamFetch { status: u16, payload: String },

    /// Not enough history to fit the seasonal model.
    #[error("Insufficient history: {required} rate points required, {available} available")]
    InsufficientHistory { required: usize, available: usize },

    #[error("Invalid exchange rate: {0}")]
    InvalidExchangeRate(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Market data operation failed: {0}")]
    MarketData(MarketDataError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for request parameters and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

impl From<MarketDataError> for Error {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::UpstreamFetch { status, body, .. } => Error::UpstreamFetch {
                status,
                payload: body,
            },
            other => Error::MarketData(other),
        }
    }
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_rejection_maps_to_upstream_fetch() {
        let err: Error = MarketDataError::UpstreamFetch {
            provider: "EXCHANGE_RATES_API".to_string(),
            status: 422,
            body: "{\"error\":\"base 'XYZ' is not supported\"}".to_string(),
        }
        .into();

        match err {
            Error::UpstreamFetch { status, payload } => {
                assert_eq!(status, 422);
                assert!(payload.contains("XYZ"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_other_provider_errors_stay_market_data() {
        let err: Error = MarketDataError::Timeout {
            provider: "EXCHANGE_RATES_API".to_string(),
        }
        .into();
        assert!(matches!(err, Error::MarketData(MarketDataError::Timeout { .. })));
    }

    #[test]
    fn test_insufficient_history_display() {
        let err = Error::InsufficientHistory {
            required: 10,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient history: 10 rate points required, 3 available"
        );
    }
}
