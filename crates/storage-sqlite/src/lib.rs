//! SQLite storage implementation for Ratecast.
//!
//! This crate is the only place in the workspace where Diesel dependencies
//! exist. It implements [`ratecast_core::fx::RateStoreTrait`] and contains:
//! - Database connection pooling and management
//! - Embedded Diesel migrations for the `currency` and `exchange_rate` tables
//! - A single writer actor that serializes all writes
//!
//! ```text
//!   core (reconciler, forecaster)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod fx;
pub mod schema;

pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};
pub use errors::{IntoCore, StorageError};
pub use fx::FxRepository;

pub use ratecast_core::errors::{DatabaseError, Error, Result};
