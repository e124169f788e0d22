//! Integration tests for issue repository CRUD against a real database.
//!
//! - Create with defaults (empty optionals, open=true, timestamps set)
//! - Exact-match filtered listing scoped by project
//! - Partial update merge and `updated_on` refresh
//! - Hard delete

use issuetrack_db::models::issue::{CreateIssue, IssueFilter, UpdateIssue};
use issuetrack_db::repositories::IssueRepo;
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_issue(title: &str, created_by: &str) -> CreateIssue {
    CreateIssue {
        issue_title: Some(title.to_string()),
        issue_text: Some("some text".to_string()),
        created_by: Some(created_by.to_string()),
        assigned_to: None,
        status_text: None,
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn create_fills_defaults(pool: PgPool) {
    let issue = IssueRepo::create(&pool, "apitest", &new_issue("First", "Alice"))
        .await
        .unwrap();

    assert_eq!(issue.project, "apitest");
    assert_eq!(issue.issue_title, "First");
    assert_eq!(issue.assigned_to, "");
    assert_eq!(issue.status_text, "");
    assert!(issue.open);
    assert_eq!(issue.created_on, issue.updated_on);
}

#[sqlx::test]
async fn create_keeps_optional_fields(pool: PgPool) {
    let input = CreateIssue {
        assigned_to: Some("Joe".to_string()),
        status_text: Some("In QA".to_string()),
        ..new_issue("With options", "Alice")
    };
    let issue = IssueRepo::create(&pool, "apitest", &input).await.unwrap();

    assert_eq!(issue.assigned_to, "Joe");
    assert_eq!(issue.status_text, "In QA");
}

// ---------------------------------------------------------------------------
// List / filter
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn list_is_scoped_by_project(pool: PgPool) {
    IssueRepo::create(&pool, "alpha", &new_issue("A", "Alice"))
        .await
        .unwrap();
    IssueRepo::create(&pool, "beta", &new_issue("B", "Bob"))
        .await
        .unwrap();

    let alpha = IssueRepo::list_filtered(&pool, "alpha", &IssueFilter::default())
        .await
        .unwrap();
    assert_eq!(alpha.len(), 1);
    assert_eq!(alpha[0].issue_title, "A");

    let gamma = IssueRepo::list_filtered(&pool, "gamma", &IssueFilter::default())
        .await
        .unwrap();
    assert!(gamma.is_empty());
}

#[sqlx::test]
async fn list_applies_every_filter_exactly(pool: PgPool) {
    IssueRepo::create(&pool, "apitest", &new_issue("One", "Alice"))
        .await
        .unwrap();
    let second = IssueRepo::create(&pool, "apitest", &new_issue("Two", "Bob"))
        .await
        .unwrap();
    IssueRepo::update(
        &pool,
        second.id,
        &UpdateIssue {
            open: Some(false),
            ..UpdateIssue::default()
        },
    )
    .await
    .unwrap();

    let filter = IssueFilter {
        created_by: Some("Bob".to_string()),
        open: Some(false),
        ..IssueFilter::default()
    };
    let matched = IssueRepo::list_filtered(&pool, "apitest", &filter)
        .await
        .unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, second.id);

    // Same filter with the wrong creator matches nothing.
    let filter = IssueFilter {
        created_by: Some("Alice".to_string()),
        open: Some(false),
        ..IssueFilter::default()
    };
    let matched = IssueRepo::list_filtered(&pool, "apitest", &filter)
        .await
        .unwrap();
    assert!(matched.is_empty());
}

#[sqlx::test]
async fn list_filters_by_timestamps(pool: PgPool) {
    let first = IssueRepo::create(&pool, "apitest", &new_issue("One", "Alice"))
        .await
        .unwrap();
    IssueRepo::create(&pool, "apitest", &new_issue("Two", "Bob"))
        .await
        .unwrap();

    let filter = IssueFilter {
        created_on: Some(first.created_on),
        ..IssueFilter::default()
    };
    let matched = IssueRepo::list_filtered(&pool, "apitest", &filter)
        .await
        .unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, first.id);

    let filter = IssueFilter {
        updated_on: Some(first.updated_on),
        ..IssueFilter::default()
    };
    let matched = IssueRepo::list_filtered(&pool, "apitest", &filter)
        .await
        .unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, first.id);
}

#[sqlx::test]
async fn list_preserves_insertion_order(pool: PgPool) {
    for title in ["first", "second", "third"] {
        IssueRepo::create(&pool, "apitest", &new_issue(title, "Alice"))
            .await
            .unwrap();
    }

    let issues = IssueRepo::list_filtered(&pool, "apitest", &IssueFilter::default())
        .await
        .unwrap();
    let titles: Vec<_> = issues.iter().map(|i| i.issue_title.as_str()).collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn update_merges_and_refreshes_updated_on(pool: PgPool) {
    let created = IssueRepo::create(&pool, "apitest", &new_issue("Original", "Alice"))
        .await
        .unwrap();

    let update = UpdateIssue {
        issue_text: Some("revised text".to_string()),
        open: Some(false),
        ..UpdateIssue::default()
    };
    let updated = IssueRepo::update(&pool, created.id, &update)
        .await
        .unwrap()
        .expect("row should exist");

    // Untouched fields survive the merge.
    assert_eq!(updated.issue_title, "Original");
    assert_eq!(updated.issue_text, "revised text");
    assert!(!updated.open);
    assert_eq!(updated.created_on, created.created_on);
    assert!(updated.updated_on > created.updated_on);
}

#[sqlx::test]
async fn update_missing_row_returns_none(pool: PgPool) {
    let update = UpdateIssue {
        issue_text: Some("whatever".to_string()),
        ..UpdateIssue::default()
    };
    let result = IssueRepo::update(&pool, Uuid::new_v4(), &update)
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn delete_removes_the_row(pool: PgPool) {
    let created = IssueRepo::create(&pool, "apitest", &new_issue("Doomed", "Alice"))
        .await
        .unwrap();

    assert!(IssueRepo::delete(&pool, created.id).await.unwrap());
    assert!(IssueRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());

    // A second delete finds nothing.
    assert!(!IssueRepo::delete(&pool, created.id).await.unwrap());
}
