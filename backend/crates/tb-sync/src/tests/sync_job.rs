use crate::tests::fake_source::{FakeSource, synced_issue};
use crate::{IssuePage, IssueSync};

use tb_core::{IssueAnnotations, IssueState, SyncStatus};
use tb_db::{IssueRepository, SyncStatusRepository, connect_in_memory};

use chrono::{DateTime, TimeZone, Utc};
use googletest::prelude::*;

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap()
}

#[tokio::test]
async fn given_cold_start_when_run_then_all_issues_stored_and_watermark_set() {
    // Given
    let pool = connect_in_memory().await.unwrap();
    let source = FakeSource::with_issues(
        vec![synced_issue(1, 10, IssueState::Open)],
        vec![synced_issue(2, 20, IssueState::Closed)],
    );
    let job = IssueSync::new(source, pool.clone());

    // When
    let report = job.run_at(at(9)).await.unwrap();

    // Then
    assert_that!(report.fetched, eq(2));
    assert_that!(report.inserted, eq(2));
    assert_that!(report.updated, eq(0));
    assert_that!(report.skipped_pull_requests, eq(1));
    assert_that!(IssueRepository::new(pool.clone()).count().await.unwrap(), eq(2));
    let status = SyncStatusRepository::new(pool).get().await.unwrap();
    assert_that!(status, some(eq(SyncStatus::new(at(9)))));
}

#[tokio::test]
async fn given_cold_start_when_run_then_no_since_sent() {
    let pool = connect_in_memory().await.unwrap();
    let job = IssueSync::new(FakeSource::default(), pool);

    job.run_at(at(9)).await.unwrap();

    let seen = job.source().seen_since.lock().unwrap().clone();
    assert!(seen.iter().all(Option::is_none));
}

#[tokio::test]
async fn given_previous_watermark_when_run_then_incremental_fetch_uses_it() {
    // Given
    let pool = connect_in_memory().await.unwrap();
    let previous = SyncStatus::new(at(6));
    SyncStatusRepository::new(pool.clone())
        .set(&previous)
        .await
        .unwrap();
    let job = IssueSync::new(FakeSource::default(), pool);

    // When
    job.run_at(at(9)).await.unwrap();

    // Then
    let seen = job.source().seen_since.lock().unwrap().clone();
    assert!(!seen.is_empty());
    assert!(seen.iter().all(|since| *since == Some(previous)));
}

#[tokio::test]
async fn given_same_remote_data_when_run_twice_then_rows_unchanged() {
    // Given
    let pool = connect_in_memory().await.unwrap();
    let job = IssueSync::new(
        FakeSource::with_issues(vec![synced_issue(1, 10, IssueState::Open)], vec![]),
        pool.clone(),
    );
    let repo = IssueRepository::new(pool);
    job.run_at(at(9)).await.unwrap();
    let first = repo.find_by_id(1).await.unwrap();

    // When
    let report = job.run_at(at(10)).await.unwrap();

    // Then
    assert_that!(report.inserted, eq(0));
    assert_that!(report.updated, eq(1));
    assert_that!(repo.find_by_id(1).await.unwrap(), eq(&first));
}

#[tokio::test]
async fn given_annotated_issue_when_synced_then_annotations_untouched() {
    // Given
    let pool = connect_in_memory().await.unwrap();
    let repo = IssueRepository::new(pool.clone());
    let job = IssueSync::new(
        FakeSource::with_issues(vec![synced_issue(1, 10, IssueState::Open)], vec![]),
        pool,
    );
    job.run_at(at(9)).await.unwrap();
    let annotations = IssueAnnotations::from_input("watch this", "carol", Some(2));
    repo.update_annotations(1, &annotations).await.unwrap();

    // When
    job.run_at(at(10)).await.unwrap();

    // Then
    let issue = repo.find_by_id(1).await.unwrap().unwrap();
    assert_that!(issue.annotations, eq(&annotations));
}

#[tokio::test]
async fn given_failing_closing_pr_fetch_when_run_then_watermark_unchanged() {
    // Given
    let pool = connect_in_memory().await.unwrap();
    let status_repo = SyncStatusRepository::new(pool.clone());
    let previous = SyncStatus::new(at(6));
    status_repo.set(&previous).await.unwrap();
    let mut source = FakeSource::with_issues(vec![synced_issue(1, 10, IssueState::Open)], vec![]);
    source.fail_closing_prs = true;
    let job = IssueSync::new(source, pool);

    // When
    let result = job.run_at(at(9)).await;

    // Then
    assert_that!(result, err(anything()));
    assert_that!(status_repo.get().await.unwrap(), some(eq(previous)));
}

#[tokio::test]
async fn given_clock_behind_watermark_when_run_then_watermark_not_moved_back() {
    let pool = connect_in_memory().await.unwrap();
    let status_repo = SyncStatusRepository::new(pool.clone());
    let previous = SyncStatus::new(at(12));
    status_repo.set(&previous).await.unwrap();
    let job = IssueSync::new(FakeSource::default(), pool);

    let report = job.run_at(at(9)).await.unwrap();

    assert_that!(report.watermark, eq(previous));
    assert_that!(status_repo.get().await.unwrap(), some(eq(previous)));
}

#[tokio::test]
async fn given_multiple_pages_when_run_then_fetches_until_empty_page() {
    // Given: page 1 holds only pull requests, page 2 holds an issue
    let pool = connect_in_memory().await.unwrap();
    let mut source = FakeSource::default();
    source.pages.insert(
        (IssueState::Open, 1),
        IssuePage {
            issues: vec![],
            pull_requests: 3,
        },
    );
    source.pages.insert(
        (IssueState::Open, 2),
        IssuePage {
            issues: vec![synced_issue(5, 50, IssueState::Open)],
            pull_requests: 0,
        },
    );
    let job = IssueSync::new(source, pool);

    // When
    let report = job.run_at(at(9)).await.unwrap();

    // Then
    assert_that!(report.fetched, eq(1));
    assert_that!(report.skipped_pull_requests, eq(3));
}

#[tokio::test]
async fn given_paged_closing_prs_when_run_then_links_from_all_pages_applied() {
    // Given
    let pool = connect_in_memory().await.unwrap();
    let source = FakeSource::with_issues(
        vec![
            synced_issue(1, 10, IssueState::Open),
            synced_issue(2, 20, IssueState::Open),
            synced_issue(3, 30, IssueState::Open),
        ],
        vec![],
    )
    .with_closing_links(vec![vec![(10, 100)], vec![(20, 200)]]);
    let repo = IssueRepository::new(pool.clone());
    let job = IssueSync::new(source, pool);

    // When
    let report = job.run_at(at(9)).await.unwrap();

    // Then
    assert_that!(report.closing_links, eq(2));
    let linked: Vec<Option<i64>> = vec![
        repo.find_by_id(1).await.unwrap().unwrap().closing_pr_number,
        repo.find_by_id(2).await.unwrap().unwrap().closing_pr_number,
        repo.find_by_id(3).await.unwrap().unwrap().closing_pr_number,
    ];
    assert_that!(linked, eq(&vec![Some(100), Some(200), None]));
}
