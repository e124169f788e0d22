pub mod health;
pub mod issues;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /issues/{project}    GET, POST, PUT, DELETE
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/issues", issues::router())
}
