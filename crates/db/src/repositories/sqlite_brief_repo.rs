//! SQLite-backed brief store for the standalone host.

use async_trait::async_trait;
use findify_core::brief::BriefRecord;
use sqlx::SqlitePool;

use crate::models::brief::Brief;
use crate::store::{BriefStore, TableName};

/// Default table name for the standalone host.
pub const DEFAULT_TABLE: &str = "briefings";

/// Column list returned by inserts.
const COLUMNS: &str = "id, nome, email, product, budget, style, brand, options, created_at";

/// Brief store over a local SQLite file.
#[derive(Debug, Clone)]
pub struct SqliteBriefRepo {
    pool: SqlitePool,
    table: TableName,
}

impl SqliteBriefRepo {
    pub fn new(pool: SqlitePool, table: TableName) -> Self {
        Self { pool, table }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl BriefStore for SqliteBriefRepo {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS {table} ( \
                 id INTEGER PRIMARY KEY AUTOINCREMENT, \
                 nome TEXT NOT NULL, \
                 email TEXT NOT NULL, \
                 product TEXT NOT NULL, \
                 budget REAL, \
                 style TEXT NOT NULL, \
                 brand TEXT, \
                 options INTEGER NOT NULL DEFAULT 3, \
                 created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP \
             )",
            table = self.table
        );
        sqlx::query(&ddl).execute(&self.pool).await?;
        tracing::debug!(table = %self.table, "Briefs table ensured");
        Ok(())
    }

    async fn insert(&self, record: &BriefRecord) -> Result<Brief, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} (nome, email, product, budget, style, brand, options) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
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
