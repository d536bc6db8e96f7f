//! The storage seam between the submission pipeline and a database.

use async_trait::async_trait;
use findify_core::brief::BriefRecord;

use crate::models::brief::Brief;

/// Durable, append-only storage for accepted briefs.
///
/// Implementations must insert a record atomically (one statement, bound
/// parameters) and let the database assign `id` and `created_at`.
#[async_trait]
pub trait BriefStore: Send + Sync {
    /// Short backend name used in logs and the health payload.
    fn backend(&self) -> &'static str;

    /// Create the briefs table if it does not exist. Safe to call repeatedly.
    async fn ensure_schema(&self) -> Result<(), sqlx::Error>;

    /// Insert one brief and return the stored row.
    async fn insert(&self, record: &BriefRecord) -> Result<Brief, sqlx::Error>;

    /// Connectivity check for `/api/health`.
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

/// Configured table names are formatted into SQL, so they are restricted
/// to plain identifiers.
#[derive(Debug, thiserror::Error)]
#[error("Invalid table name '{0}': only ASCII letters, digits and '_' are allowed")]
pub struct InvalidTableName(pub String);

/// A table name known to be a safe SQL identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(String);

impl TableName {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidTableName> {
        let name = name.into();
        let valid = !name.is_empty()
            && !name.starts_with(|c: char| c.is_ascii_digit())
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if valid {
            Ok(Self(name))
        } else {
            Err(InvalidTableName(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TableName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
