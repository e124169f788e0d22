//! Issue entity model and request DTOs.

use issuetrack_core::types::{IssueId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `issues` table.
///
/// Serializes to the wire shape: exactly nine keys, with the primary key
/// renamed to `_id` and the `project` namespace column omitted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Issue {
    #[serde(rename = "_id")]
    pub id: IssueId,
    #[serde(skip_serializing)]
    pub project: String,
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    pub assigned_to: String,
    pub status_text: String,
    pub created_on: Timestamp,
    pub updated_on: Timestamp,
    pub open: bool,
}

/// DTO for creating a new issue.
///
/// Required fields are `Option` so an absent field reaches validation instead
/// of failing JSON extraction; `issuetrack_core::issue::validate_required`
/// must pass before this is handed to the repository.
#[derive(Debug, Default, Deserialize)]
pub struct CreateIssue {
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
}

/// The mutable fields of an issue, all optional, for partial updates.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateIssue {
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
    pub open: Option<bool>,
}

impl UpdateIssue {
    /// Discard empty-string fields.
    ///
    /// Form clients submit `""` for inputs the user never touched; those must
    /// not count as update fields and must not overwrite stored values.
    pub fn strip_blank(&mut self) {
        for field in [
            &mut self.issue_title,
            &mut self.issue_text,
            &mut self.created_by,
            &mut self.assigned_to,
            &mut self.status_text,
        ] {
            if field.as_deref() == Some("") {
                *field = None;
            }
        }
    }

    /// True when no update fields remain.
    pub fn is_empty(&self) -> bool {
        self.issue_title.is_none()
            && self.issue_text.is_none()
            && self.created_by.is_none()
            && self.assigned_to.is_none()
            && self.status_text.is_none()
            && self.open.is_none()
    }
}

/// PUT request body: the target `_id` plus any subset of mutable fields.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateIssueRequest {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: UpdateIssue,
}

/// DELETE request body.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteIssueRequest {
    #[serde(rename = "_id")]
    pub id: Option<String>,
}

/// Query parameters for listing issues: exact-match filters against stored
/// fields, combined with the path's project namespace.
///
/// Every stored field is filterable. A query key that is not a stored field
/// is a deserialization error, surfaced by the api layer as a JSON 400.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IssueFilter {
    #[serde(rename = "_id")]
    pub id: Option<IssueId>,
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
    pub created_on: Option<Timestamp>,
    pub updated_on: Option<Timestamp>,
    pub open: Option<bool>,
}
