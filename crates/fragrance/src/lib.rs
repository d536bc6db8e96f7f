//! Client for the third-party fragrance data API.
//!
//! The service only proxies two read endpoints (perfume search and dupe
//! lookup) and passes their JSON through untouched.

pub mod api;

pub use api::{FragranceApi, FragranceApiError};
