//! Route definitions for the issue API.
//!
//! Mounted at `/issues` by `api_routes()`. All four verbs share the single
//! `/{project}` path; PUT and DELETE address the target issue by the `_id`
//! in the request body, not the path.

use axum::routing::get;
use axum::Router;

use crate::handlers::issues;
use crate::state::AppState;

/// Issue routes.
///
/// ```text
/// GET    /{project}    -> list_issues (query params are field filters)
/// POST   /{project}    -> create_issue
/// PUT    /{project}    -> update_issue
/// DELETE /{project}    -> delete_issue
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{project}",
        get(issues::list_issues)
            .post(issues::create_issue)
            .put(issues::update_issue)
            .delete(issues::delete_issue),
    )
}
