//! Stored brief row.

use findify_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the briefs table, as returned by an insert.
///
/// The name column keeps its original `nome` spelling so existing tables
/// stay readable.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Brief {
    pub id: DbId,
    #[sqlx(rename = "nome")]
    pub name: String,
    pub email: String,
    pub product: String,
    pub budget: Option<f64>,
    pub style: String,
    pub brand: Option<String>,
    pub options: i16,
    pub created_at: Timestamp,
}
