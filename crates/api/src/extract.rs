//! Request extractors for the issue endpoints.
//!
//! Axum's stock `Json` and `Query` rejections render as plain text, which
//! would leak non-JSON error bodies onto the wire. These wrappers keep every
//! extraction failure inside [`ApiError`] so the response is always a JSON
//! object with an `error` key.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor with a defaulting empty-body case.
///
/// A request with no body at all deserializes to the DTO's `Default` (all
/// fields absent), so the handler's own validation ladder produces the
/// response -- a bodyless DELETE reports `missing _id`, not a transport
/// error. A body that is present but unreadable as JSON is rejected as
/// [`ApiError::InvalidBody`]. Content type is not enforced; the body is the
/// contract.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::InvalidBody)?;

        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|_| ApiError::InvalidBody)
    }
}

/// Query-string extractor for exact-match field filters.
///
/// Rejections (an unparseable value such as `?open=maybe`, or a key that is
/// not a filterable field) map to [`ApiError::InvalidFilter`] instead of
/// axum's plain-text 400.
pub struct FilterQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for FilterQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(filter)| Self(filter))
            .map_err(|_| ApiError::InvalidFilter)
    }
}
