use crate::Result as SyncErrorResult;

use tb_core::{IssueState, SyncStatus, SyncedIssue};

use async_trait::async_trait;

/// One page of the issues listing.
///
/// The listing endpoint also returns pull requests; those are counted but
/// not kept. A page is exhausted only when it held nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssuePage {
    pub issues: Vec<SyncedIssue>,
    pub pull_requests: usize,
}

impl IssuePage {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty() && self.pull_requests == 0
    }
}

/// An open pull request declaring it will close an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosingLink {
    pub issue_number: i64,
    pub pr_number: i64,
}

/// One cursor page of closing-PR links
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosingPrPage {
    pub links: Vec<ClosingLink>,
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

/// Remote issue tracker the sync job mirrors
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Page `page` (1-based) of issues in `state`, changed since `since` if given
    async fn fetch_issue_page(
        &self,
        state: IssueState,
        page: u32,
        since: Option<SyncStatus>,
    ) -> SyncErrorResult<IssuePage>;

    /// Closing-PR links after `cursor`, or from the start when `None`
    async fn fetch_closing_prs(&self, cursor: Option<&str>) -> SyncErrorResult<ClosingPrPage>;
}
