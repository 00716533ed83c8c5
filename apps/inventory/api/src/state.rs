//! Shared application state handed to routers at startup.

/// Cloned into each router; the connection is an `Arc`-backed pool.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: database::postgres::DatabaseConnection,
}
