/// Issue primary keys are UUIDs generated at insert time.
pub type IssueId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
