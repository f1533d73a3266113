#![allow(dead_code)]

use tb_core::{IssueState, LabelList, SyncedIssue};

use chrono::{DateTime, TimeZone, Utc};
use sqlx::SqlitePool;

/// In-memory pool with migrations applied
pub async fn create_test_pool() -> SqlitePool {
    tb_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

pub fn timestamp(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap()
}

/// Creates an open SyncedIssue with sensible defaults
pub fn create_synced_issue(id: i64, number: i64, labels: &[&str]) -> SyncedIssue {
    SyncedIssue {
        id,
        number,
        title: format!("Issue #{}", number),
        author: "satoshi".to_string(),
        state: IssueState::Open,
        body: Some("Something is broken".to_string()),
        url: format!("https://github.com/bitcoin/bitcoin/issues/{}", number),
        labels: LabelList::from_names(labels),
        created_at: timestamp(1),
        updated_at: timestamp(2),
        closed_at: None,
        closed_by: None,
    }
}
