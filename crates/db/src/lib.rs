//! Persistence for accepted briefs.
//!
//! Two backends implement [`BriefStore`]: a local SQLite file for the
//! standalone host and PostgreSQL for the plugin host. Both create their
//! table idempotently and insert with bound parameters only.

use std::path::{Path, PathBuf};
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod models;
pub mod repositories;
pub mod store;

pub use store::{BriefStore, InvalidTableName, TableName};

/// File name of the standalone host's database inside its data directory.
pub const SQLITE_FILE_NAME: &str = "briefings.sqlite";

/// Create a PostgreSQL connection pool from a database URL.
pub async fn create_pg_pool(database_url: &str) -> Result<sqlx::PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Create a SQLite connection pool for the database file at `path`,
/// creating the file if it does not exist yet.
///
/// WAL mode plus a busy timeout lets concurrent submissions append without
/// failing on a locked database.
pub async fn create_sqlite_pool(path: &Path) -> Result<sqlx::SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Make sure `data_dir` exists and return the database file path inside it.
pub fn prepare_sqlite_path(data_dir: &Path) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(data_dir)?;
    Ok(data_dir.join(SQLITE_FILE_NAME))
}
