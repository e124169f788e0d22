use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable; the pool is already reference-counted and the
/// config sits behind an `Arc`. No other state exists between requests --
/// the database is the sole arbiter of consistency.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: issuetrack_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
