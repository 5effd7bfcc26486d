//! Domain types shared by the query pipeline and its callers.

pub mod query_state;
pub mod types;
pub mod user;
