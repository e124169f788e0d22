//! Validation rules for issue records.
//!
//! Handlers call these before touching the repository so that no invalid
//! document ever reaches the store.

use uuid::Uuid;

use crate::error::CoreError;
use crate::types::IssueId;

/// True when a required field is present and non-blank after trimming.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Check the three required creation fields.
///
/// Checked in precedence order (title, text, created_by); the first failure
/// wins, though the error does not say which field failed.
pub fn validate_required(
    issue_title: Option<&str>,
    issue_text: Option<&str>,
    created_by: Option<&str>,
) -> Result<(), CoreError> {
    for field in [issue_title, issue_text, created_by] {
        if !is_present(field) {
            return Err(CoreError::MissingRequiredField);
        }
    }
    Ok(())
}

/// Parse a client-supplied id string.
///
/// Keeps "not a well-formed id" distinct from "no such row": callers get a
/// [`CoreError::MalformedId`] here and check existence separately.
pub fn parse_id(raw: &str) -> Result<IssueId, CoreError> {
    Uuid::parse_str(raw.trim()).map_err(|_| CoreError::MalformedId(raw.to_string()))
}
