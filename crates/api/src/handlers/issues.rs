//! Handlers for the issue CRUD surface.
//!
//! All four verbs live on `/api/issues/{project}`. The handlers own input
//! validation and error shaping; everything else (filtering, id generation,
//! concurrency) is delegated to the repository. The PUT and DELETE ladders
//! check id format before row existence -- both failures read the same on the
//! wire, but the paths stay separate here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use issuetrack_core::issue;
use issuetrack_db::models::issue::{
    CreateIssue, DeleteIssueRequest, IssueFilter, UpdateIssueRequest,
};
use issuetrack_db::repositories::IssueRepo;

use crate::error::{ApiError, ApiResult};
use crate::extract::{FilterQuery, JsonBody};
use crate::response::ActionResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /api/issues/{project}
// ---------------------------------------------------------------------------

/// List a project's issues, narrowed by exact-match query-parameter filters.
///
/// `?open=false&assigned_to=Joe` returns only issues matching both; no
/// parameters returns the whole project. Always a JSON array, empty when
/// nothing matches.
pub async fn list_issues(
    State(state): State<AppState>,
    Path(project): Path<String>,
    FilterQuery(filter): FilterQuery<IssueFilter>,
) -> ApiResult<impl IntoResponse> {
    let issues = IssueRepo::list_filtered(&state.pool, &project, &filter).await?;
    Ok(Json(issues))
}

// ---------------------------------------------------------------------------
// POST /api/issues/{project}
// ---------------------------------------------------------------------------

/// Create an issue.
///
/// `issue_title`, `issue_text`, and `created_by` must be present and
/// non-blank; optional fields default to the empty string, `open` to true.
/// Responds with the full stored record including the generated `_id`.
pub async fn create_issue(
    State(state): State<AppState>,
    Path(project): Path<String>,
    JsonBody(input): JsonBody<CreateIssue>,
) -> ApiResult<impl IntoResponse> {
    issue::validate_required(
        input.issue_title.as_deref(),
        input.issue_text.as_deref(),
        input.created_by.as_deref(),
    )
    .map_err(|_| ApiError::RequiredFieldsMissing)?;

    let created = IssueRepo::create(&state.pool, &project, &input).await?;

    tracing::info!(issue_id = %created.id, %project, "Issue created");

    Ok((StatusCode::CREATED, Json(created)))
}

// ---------------------------------------------------------------------------
// PUT /api/issues/{project}
// ---------------------------------------------------------------------------

/// Apply a partial update to the issue named by the body's `_id`.
///
/// Validation ladder, each step terminal:
/// 1. no `_id`                      -> `missing _id`
/// 2. `_id` not a well-formed id    -> `could not update` (id echoed)
/// 3. zero fields after blank strip -> `no update field(s) sent`
/// 4. no row with that id           -> `could not update`
/// 5. otherwise merge, refresh `updated_on`, acknowledge
///
/// A storage failure during the merge also reads `could not update`; the
/// caller cannot tell it from a missing row.
pub async fn update_issue(
    State(state): State<AppState>,
    Path(project): Path<String>,
    JsonBody(input): JsonBody<UpdateIssueRequest>,
) -> ApiResult<impl IntoResponse> {
    let raw_id = input.id.ok_or(ApiError::MissingId)?;

    let id = match issue::parse_id(&raw_id) {
        Ok(id) => id,
        Err(_) => return Err(ApiError::UpdateFailed { id: raw_id }),
    };

    let mut fields = input.fields;
    fields.strip_blank();
    if fields.is_empty() {
        return Err(ApiError::NoUpdateFields { id: raw_id });
    }

    let updated = IssueRepo::update(&state.pool, id, &fields)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, issue_id = %id, "Database error updating issue");
            ApiError::UpdateFailed {
                id: raw_id.clone(),
            }
        })?;

    if updated.is_none() {
        return Err(ApiError::UpdateFailed { id: raw_id });
    }

    tracing::info!(issue_id = %id, %project, "Issue updated");

    Ok(Json(ActionResponse::updated(raw_id)))
}

// ---------------------------------------------------------------------------
// DELETE /api/issues/{project}
// ---------------------------------------------------------------------------

/// Remove the issue named by the body's `_id`. No soft-delete, no audit trail.
///
/// Same ladder as PUT without the field-count step: missing `_id`, malformed
/// `_id`, missing row, then success.
pub async fn delete_issue(
    State(state): State<AppState>,
    Path(project): Path<String>,
    JsonBody(input): JsonBody<DeleteIssueRequest>,
) -> ApiResult<impl IntoResponse> {
    let raw_id = input.id.ok_or(ApiError::MissingId)?;

    let id = match issue::parse_id(&raw_id) {
        Ok(id) => id,
        Err(_) => return Err(ApiError::DeleteFailed { id: raw_id }),
    };

    let deleted = IssueRepo::delete(&state.pool, id).await.map_err(|err| {
        tracing::error!(error = %err, issue_id = %id, "Database error deleting issue");
        ApiError::DeleteFailed {
            id: raw_id.clone(),
        }
    })?;

    if !deleted {
        return Err(ApiError::DeleteFailed { id: raw_id });
    }

    tracing::info!(issue_id = %id, %project, "Issue deleted");

    Ok(Json(ActionResponse::deleted(raw_id)))
}
