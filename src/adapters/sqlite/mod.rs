//! SQLite adapters - embedded persistence for the deck.
//!
//! - `connect` - opens a pool from [`DatabaseConfig`]
//! - `SqliteQuestionRepository` - unit-of-work implementation of `QuestionRepository`

mod question_repository;

pub use question_repository::SqliteQuestionRepository;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

use crate::config::DatabaseConfig;

/// Opens a connection pool for `config`.
///
/// In-memory databases are private to each connection, so their pool is
/// pinned to a single connection that is never recycled.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(config.create_if_missing)
        .foreign_keys(true);

    let mut pool = SqlitePoolOptions::new().acquire_timeout(config.acquire_timeout());
    pool = if config.is_in_memory() {
        pool.max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        pool.max_connections(config.max_connections)
    };

    pool.connect_with(options).await
}

/// Applies the embedded migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
