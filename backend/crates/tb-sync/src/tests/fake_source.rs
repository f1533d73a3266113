use crate::{ClosingLink, ClosingPrPage, IssuePage, IssueSource, Result as SyncErrorResult, SyncError};

use tb_core::{IssueState, LabelList, SyncStatus, SyncedIssue};

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

/// In-memory issue source with scripted pages
#[derive(Default)]
pub(crate) struct FakeSource {
    pub pages: HashMap<(IssueState, u32), IssuePage>,
    /// Closing-PR pages; page N is served for cursor `Some("cN")`, page 0 for `None`
    pub closing_pages: Vec<ClosingPrPage>,
    pub fail_closing_prs: bool,
    pub seen_since: Mutex<Vec<Option<SyncStatus>>>,
}

impl FakeSource {
    pub fn with_issues(open: Vec<SyncedIssue>, closed: Vec<SyncedIssue>) -> Self {
        let mut source = Self::default();
        source.pages.insert(
            (IssueState::Open, 1),
            IssuePage {
                issues: open,
                pull_requests: 1,
            },
        );
        source.pages.insert(
            (IssueState::Closed, 1),
            IssuePage {
                issues: closed,
                pull_requests: 0,
            },
        );
        source
    }

    pub fn with_closing_links(mut self, pages: Vec<Vec<(i64, i64)>>) -> Self {
        let count = pages.len();
        self.closing_pages = pages
            .into_iter()
            .enumerate()
            .map(|(i, links)| ClosingPrPage {
                links: links
                    .into_iter()
                    .map(|(issue_number, pr_number)| ClosingLink {
                        issue_number,
                        pr_number,
                    })
                    .collect(),
                end_cursor: Some(format!("c{}", i + 1)),
                has_next_page: i + 1 < count,
            })
            .collect();
        self
    }
}

#[async_trait]
impl IssueSource for FakeSource {
    async fn fetch_issue_page(
        &self,
        state: IssueState,
        page: u32,
        since: Option<SyncStatus>,
    ) -> SyncErrorResult<IssuePage> {
        self.seen_since.lock().unwrap().push(since);
        Ok(self.pages.get(&(state, page)).cloned().unwrap_or_default())
    }

    async fn fetch_closing_prs(&self, cursor: Option<&str>) -> SyncErrorResult<ClosingPrPage> {
        if self.fail_closing_prs {
            return Err(SyncError::GraphQl {
                message: "boom".to_string(),
                location: error_location::ErrorLocation::from(std::panic::Location::caller()),
            });
        }

        let index = match cursor {
            None => 0,
            Some(c) => c.trim_start_matches('c').parse().unwrap(),
        };
        Ok(self.closing_pages.get(index).cloned().unwrap_or_default())
    }
}

pub(crate) fn synced_issue(id: i64, number: i64, state: IssueState) -> SyncedIssue {
    SyncedIssue {
        id,
        number,
        title: format!("Issue #{}", number),
        author: "satoshi".to_string(),
        state,
        body: None,
        url: format!("https://github.com/bitcoin/bitcoin/issues/{}", number),
        labels: LabelList::from_names(["bug"]),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        closed_at: None,
        closed_by: None,
    }
}
