//! Models loaded from outside the query layer.

pub mod config;
