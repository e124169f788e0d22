//! Typed success payloads for mutating endpoints.
//!
//! PUT and DELETE acknowledge with `{ "result": ..., "_id": ... }`. Use
//! [`ActionResponse`] instead of ad-hoc `serde_json::json!` to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

/// `{ "result": <verb outcome>, "_id": <echoed id> }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub result: &'static str,
    #[serde(rename = "_id")]
    pub id: String,
}

impl ActionResponse {
    /// Acknowledge a successful update.
    pub fn updated(id: String) -> Self {
        Self {
            result: "successfully updated",
            id,
        }
    }

    /// Acknowledge a successful delete.
    pub fn deleted(id: String) -> Self {
        Self {
            result: "successfully deleted",
            id,
        }
    }
}
