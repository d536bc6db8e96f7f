pub mod briefs;
pub mod fragrance;
pub mod health;
