//! Storage wiring: picks and connects the brief store for the host mode.

use std::sync::Arc;

use findify_db::repositories::{PgBriefRepo, SqliteBriefRepo};
use findify_db::{BriefStore, InvalidTableName, TableName};

use crate::config::BriefHost;

#[derive(Debug, thiserror::Error)]
pub enum StoreSetupError {
    #[error("Failed to prepare data directory: {0}")]
    DataDir(#[from] std::io::Error),

    #[error(transparent)]
    TableName(#[from] InvalidTableName),

    #[error("Failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),
}

/// Connect the store for `host`: a SQLite file under the data directory for
/// the standalone host, the shared PostgreSQL database for the plugin host.
///
/// The schema is not touched here; call [`BriefStore::ensure_schema`].
pub async fn connect_store(host: &BriefHost) -> Result<Arc<dyn BriefStore>, StoreSetupError> {
    match host {
        BriefHost::Standalone { data_dir } => {
            let path = findify_db::prepare_sqlite_path(data_dir)?;
            let pool = findify_db::create_sqlite_pool(&path).await?;
            tracing::info!(path = %path.display(), "SQLite database opened");

            let table = TableName::new(findify_db::repositories::sqlite_brief_repo::DEFAULT_TABLE)?;
            Ok(Arc::new(SqliteBriefRepo::new(pool, table)))
        }
        BriefHost::Plugin {
            database_url,
            table_prefix,
            ..
        } => {
            let table = PgBriefRepo::prefixed_table(table_prefix)?;
            let pool = findify_db::create_pg_pool(database_url).await?;
            tracing::info!(%table, "PostgreSQL connection pool created");

            Ok(Arc::new(PgBriefRepo::new(pool, table)))
        }
    }
}
