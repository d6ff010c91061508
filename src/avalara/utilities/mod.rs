//! Utilities module - ping / health check

mod api;
mod models;

pub use models::PingResponse;
