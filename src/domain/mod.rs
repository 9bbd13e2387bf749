//! Domain aggregates exposed by the member search layer.

pub mod member;
pub mod page;
pub mod search;
pub mod team;
pub mod types;
