//! Store implementations.
//!
//! Each repository owns its pool and table name and implements
//! [`BriefStore`](crate::store::BriefStore).

pub mod pg_brief_repo;
pub mod sqlite_brief_repo;

pub use pg_brief_repo::PgBriefRepo;
pub use sqlite_brief_repo::SqliteBriefRepo;
