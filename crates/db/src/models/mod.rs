//! Row structs returned by the stores.

pub mod brief;
