use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce the wire error bodies of the issue
/// API: always valid JSON with an `error` key, echoing the submitted `_id`
/// where the contract requires it. Validation and not-found outcomes map to
/// 400; only storage failures map to 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A POST body is missing one of the required issue fields.
    #[error("required field(s) missing")]
    RequiredFieldsMissing,

    /// A PUT or DELETE body has no `_id`.
    #[error("missing _id")]
    MissingId,

    /// A PUT stripped down to zero update fields.
    #[error("no update field(s) sent")]
    NoUpdateFields { id: String },

    /// A PUT could not be applied: malformed id, no matching row, or a
    /// storage failure during the merge. The caller is told the same thing
    /// in all three cases.
    #[error("could not update")]
    UpdateFailed { id: String },

    /// A DELETE could not be applied; same collapsing as `UpdateFailed`.
    #[error("could not delete")]
    DeleteFailed { id: String },

    /// A request body was present but not readable as JSON.
    #[error("invalid request body")]
    InvalidBody,

    /// A GET filter value failed to parse, or named a non-filterable field.
    #[error("invalid filter")]
    InvalidFilter,

    /// A database error from sqlx, outside the id-echoing PUT/DELETE paths.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::RequiredFieldsMissing => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "required field(s) missing" }),
            ),
            ApiError::MissingId => (StatusCode::BAD_REQUEST, json!({ "error": "missing _id" })),
            ApiError::NoUpdateFields { id } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "no update field(s) sent", "_id": id }),
            ),
            ApiError::UpdateFailed { id } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "could not update", "_id": id }),
            ),
            ApiError::DeleteFailed { id } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "could not delete", "_id": id }),
            ),
            ApiError::InvalidBody => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "invalid request body" }),
            ),
            ApiError::InvalidFilter => {
                (StatusCode::BAD_REQUEST, json!({ "error": "invalid filter" }))
            }
            ApiError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "server error" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
