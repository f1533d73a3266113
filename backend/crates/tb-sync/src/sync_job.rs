use crate::{IssueSource, Result as SyncErrorResult, SyncError};

use tb_core::{IssueState, SyncStatus};
use tb_db::{IssueRepository, SyncStatusRepository, UpsertOutcome};

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::{info, warn};
use sqlx::SqlitePool;

/// What one sync run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Issues fetched (pull requests excluded)
    pub fetched: usize,
    pub skipped_pull_requests: usize,
    pub inserted: usize,
    pub updated: usize,
    /// Issue rows that now carry a closing-PR link
    pub closing_links: u64,
    pub watermark: SyncStatus,
}

/// Mirrors a remote issue tracker into the local database.
///
/// The watermark is written last, so a run that fails anywhere leaves it
/// untouched and the next run re-covers the same window. Upserts are
/// idempotent, so re-covering is harmless.
pub struct IssueSync<S> {
    source: S,
    issues: IssueRepository,
    status: SyncStatusRepository,
}

impl<S: IssueSource> IssueSync<S> {
    pub fn new(source: S, pool: SqlitePool) -> Self {
        Self {
            source,
            issues: IssueRepository::new(pool.clone()),
            status: SyncStatusRepository::new(pool),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn run(&self) -> SyncErrorResult<SyncReport> {
        self.run_at(Utc::now()).await
    }

    /// Run with an explicit start time, which becomes the new watermark
    pub async fn run_at(&self, started_at: DateTime<Utc>) -> SyncErrorResult<SyncReport> {
        let previous = self.status.get().await?;
        match previous {
            Some(status) => info!("Incremental sync since {}", status.since_param()),
            None => info!("No previous sync, fetching all issues"),
        }

        let mut fetched = 0;
        let mut skipped_pull_requests = 0;
        let mut inserted = 0;
        let mut updated = 0;

        for state in IssueState::ALL {
            let mut page = 1;
            loop {
                let result = self
                    .source
                    .fetch_issue_page(state, page, previous)
                    .await?;
                if result.is_empty() {
                    break;
                }

                skipped_pull_requests += result.pull_requests;
                for issue in &result.issues {
                    match self.issues.upsert_synced(issue).await? {
                        UpsertOutcome::Inserted => inserted += 1,
                        UpsertOutcome::Updated => updated += 1,
                    }
                }
                fetched += result.issues.len();
                page += 1;
            }
        }

        info!(
            "Fetched {} issues ({} inserted, {} updated, {} pull requests skipped)",
            fetched, inserted, updated, skipped_pull_requests
        );

        let links = self.collect_closing_links().await?;
        let closing_links = self.issues.replace_closing_pr_links(&links).await?;
        info!(
            "Fetched {} closing PR links, {} issues linked",
            links.len(),
            closing_links
        );

        let watermark = SyncStatus::advance(previous, started_at);
        self.status.set(&watermark).await?;
        info!("Updated last sync time to {}", watermark.since_param());

        Ok(SyncReport {
            fetched,
            skipped_pull_requests,
            inserted,
            updated,
            closing_links,
            watermark,
        })
    }

    /// Walk every page of closing-PR links into an issue number -> PR number map.
    /// When several PRs claim the same issue the last one seen wins.
    async fn collect_closing_links(&self) -> SyncErrorResult<HashMap<i64, i64>> {
        let mut links = HashMap::new();
        let mut cursor: Option<String> = None;

        loop {
            let page = self.source.fetch_closing_prs(cursor.as_deref()).await?;
            for link in &page.links {
                if let Some(previous) = links.insert(link.issue_number, link.pr_number)
                    && previous != link.pr_number
                {
                    warn!(
                        "Issue {} is claimed by PRs {} and {}",
                        link.issue_number, previous, link.pr_number
                    );
                }
            }

            if !page.has_next_page {
                break;
            }
            match page.end_cursor {
                Some(next) if cursor.as_deref() != Some(next.as_str()) => cursor = Some(next),
                _ => {
                    return Err(SyncError::payload(
                        "closing PR listing reports more pages without a new cursor",
                    ));
                }
            }
        }

        Ok(links)
    }
}
