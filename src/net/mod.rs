//! Network layer for the single chat request/response exchange.

pub mod api;
pub mod types;
