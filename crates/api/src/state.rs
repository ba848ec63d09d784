use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once in `main` (or per test) and cloned into each request;
/// the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: starlog_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
