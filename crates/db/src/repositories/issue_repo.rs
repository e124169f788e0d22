//! Repository for the `issues` table.

use issuetrack_core::types::IssueId;
use sqlx::PgPool;

use crate::models::issue::{CreateIssue, Issue, IssueFilter, UpdateIssue};

/// Column list for `issues` queries.
const COLUMNS: &str = "\
    id, project, issue_title, issue_text, created_by, \
    assigned_to, status_text, created_on, updated_on, open";

/// Provides CRUD operations for issues.
///
/// Filtering, id generation, and concurrency control are delegated to the
/// database; no method holds state between calls.
pub struct IssueRepo;

impl IssueRepo {
    /// Insert a new issue, returning the full row.
    ///
    /// The caller must have validated the required fields; optional fields
    /// default to the empty string, timestamps and `open` to the column
    /// defaults (`now()`, `now()`, `true`).
    pub async fn create(
        pool: &PgPool,
        project: &str,
        input: &CreateIssue,
    ) -> Result<Issue, sqlx::Error> {
        let query = format!(
            "INSERT INTO issues \
                (id, project, issue_title, issue_text, created_by, \
                 assigned_to, status_text) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Issue>(&query)
            .bind(IssueId::new_v4())
            .bind(project)
            .bind(&input.issue_title)
            .bind(&input.issue_text)
            .bind(&input.created_by)
            .bind(input.assigned_to.as_deref().unwrap_or(""))
            .bind(input.status_text.as_deref().unwrap_or(""))
            .fetch_one(pool)
            .await
    }

    /// List issues in a project, narrowed by exact-match field filters.
    ///
    /// Every supplied filter field must match; no filters means the whole
    /// project. Results come back in insertion order, and an empty match is
    /// an empty vec, never an error.
    pub async fn list_filtered(
        pool: &PgPool,
        project: &str,
        filter: &IssueFilter,
    ) -> Result<Vec<Issue>, sqlx::Error> {
        let mut conditions: Vec<String> = vec!["project = $1".to_string()];
        let mut param_idx: usize = 2;

        // Condition order and bind order below must stay in sync.
        if filter.id.is_some() {
            conditions.push(format!("id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.issue_title.is_some() {
            conditions.push(format!("issue_title = ${param_idx}"));
            param_idx += 1;
        }
        if filter.issue_text.is_some() {
            conditions.push(format!("issue_text = ${param_idx}"));
            param_idx += 1;
        }
        if filter.created_by.is_some() {
            conditions.push(format!("created_by = ${param_idx}"));
            param_idx += 1;
        }
        if filter.assigned_to.is_some() {
            conditions.push(format!("assigned_to = ${param_idx}"));
            param_idx += 1;
        }
        if filter.status_text.is_some() {
            conditions.push(format!("status_text = ${param_idx}"));
            param_idx += 1;
        }
        if filter.created_on.is_some() {
            conditions.push(format!("created_on = ${param_idx}"));
            param_idx += 1;
        }
        if filter.updated_on.is_some() {
            conditions.push(format!("updated_on = ${param_idx}"));
            param_idx += 1;
        }
        if filter.open.is_some() {
            conditions.push(format!("open = ${param_idx}"));
        }

        let query = format!(
            "SELECT {COLUMNS} FROM issues \
             WHERE {} \
             ORDER BY created_on, id",
            conditions.join(" AND ")
        );

        let mut q = sqlx::query_as::<_, Issue>(&query).bind(project);
        if let Some(id) = filter.id {
            q = q.bind(id);
        }
        if let Some(ref title) = filter.issue_title {
            q = q.bind(title);
        }
        if let Some(ref text) = filter.issue_text {
            q = q.bind(text);
        }
        if let Some(ref created_by) = filter.created_by {
            q = q.bind(created_by);
        }
        if let Some(ref assigned_to) = filter.assigned_to {
            q = q.bind(assigned_to);
        }
        if let Some(ref status_text) = filter.status_text {
            q = q.bind(status_text);
        }
        if let Some(created_on) = filter.created_on {
            q = q.bind(created_on);
        }
        if let Some(updated_on) = filter.updated_on {
            q = q.bind(updated_on);
        }
        if let Some(open) = filter.open {
            q = q.bind(open);
        }

        q.fetch_all(pool).await
    }

    /// Find an issue by id.
    pub async fn find_by_id(pool: &PgPool, id: IssueId) -> Result<Option<Issue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM issues WHERE id = $1");
        sqlx::query_as::<_, Issue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Merge the supplied fields into an existing issue and refresh
    /// `updated_on`. `Ok(None)` when no row has that id.
    pub async fn update(
        pool: &PgPool,
        id: IssueId,
        input: &UpdateIssue,
    ) -> Result<Option<Issue>, sqlx::Error> {
        let query = format!(
            "UPDATE issues SET
                issue_title = COALESCE($2, issue_title),
                issue_text = COALESCE($3, issue_text),
                created_by = COALESCE($4, created_by),
                assigned_to = COALESCE($5, assigned_to),
                status_text = COALESCE($6, status_text),
                open = COALESCE($7, open),
                updated_on = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Issue>(&query)
            .bind(id)
            .bind(&input.issue_title)
            .bind(&input.issue_text)
            .bind(&input.created_by)
            .bind(&input.assigned_to)
            .bind(&input.status_text)
            .bind(input.open)
            .fetch_optional(pool)
            .await
    }

    /// Remove an issue permanently. Returns `false` when no row had that id.
    pub async fn delete(pool: &PgPool, id: IssueId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM issues WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
