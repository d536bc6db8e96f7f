//! PostgreSQL-backed brief store for the plugin host.
//!
//! The hosted database is shared between sites, so the table name carries
//! a per-site prefix (`wp_findify_briefs` by default).

use async_trait::async_trait;
use findify_core::brief::BriefRecord;
use sqlx::PgPool;

use crate::models::brief::Brief;
use crate::store::{BriefStore, InvalidTableName, TableName};

/// Table name without the site prefix.
pub const TABLE_SUFFIX: &str = "findify_briefs";

/// Default site prefix.
pub const DEFAULT_PREFIX: &str = "wp_";

/// Column list returned by inserts. `budget` is stored as `NUMERIC(12,2)`
/// and read back as a float.
const COLUMNS: &str = "\
    id, nome, email, product, budget::DOUBLE PRECISION AS budget, style, brand, \
    options, created_at";

/// Brief store over a hosted PostgreSQL database.
#[derive(Debug, Clone)]
pub struct PgBriefRepo {
    pool: PgPool,
    table: TableName,
}

impl PgBriefRepo {
    pub fn new(pool: PgPool, table: TableName) -> Self {
        Self { pool, table }
    }

    /// Build the prefixed table name, e.g. `wp_` -> `wp_findify_briefs`.
    pub fn prefixed_table(prefix: &str) -> Result<TableName, InvalidTableName> {
        TableName::new(format!("{prefix}{TABLE_SUFFIX}"))
    }
}

#[async_trait]
impl BriefStore for PgBriefRepo {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS {table} ( \
                 id BIGSERIAL PRIMARY KEY, \
                 nome TEXT NOT NULL, \
                 email TEXT NOT NULL, \
                 product TEXT NOT NULL, \
                 budget NUMERIC(12,2), \
                 style TEXT NOT NULL, \
                 brand TEXT, \
                 options SMALLINT NOT NULL DEFAULT 3, \
                 created_at TIMESTAMPTZ NOT NULL DEFAULT NOW() \
             )",
            table = self.table
        );
        sqlx::query(&ddl).execute(&self.pool).await?;

        let index = format!(
            "CREATE INDEX IF NOT EXISTS idx_{table}_email ON {table} (email)",
            table = self.table
        );
        sqlx::query(&index).execute(&self.pool).await?;
        tracing::debug!(table = %self.table, "Briefs table ensured");
        Ok(())
    }

    async fn insert(&self, record: &BriefRecord) -> Result<Brief, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} (nome, email, product, budget, style, brand, options) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}",
            table = self.table
        );
        sqlx::query_as::<_, Brief>(&query)
            .bind(&record.name)
            .bind(&record.email)
            .bind(&record.product)
            .bind(record.budget)
            .bind(&record.style)
            .bind(&record.brand)
            .bind(record.options.get())
            .fetch_one(&self.pool)
            .await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
