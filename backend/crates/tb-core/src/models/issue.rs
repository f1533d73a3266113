use crate::{IssueAnnotations, IssueState, LabelList};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields owned by the sync job, as fetched from the remote tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncedIssue {
    /// Remote numeric id, stable across renames and transfers
    pub id: i64,
    pub number: i64,
    pub title: String,
    pub author: String,
    pub state: IssueState,
    pub body: Option<String>,
    pub url: String,
    pub labels: LabelList,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub closed_by: Option<String>,
}

/// A mirrored issue with its local annotations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    pub number: i64,
    pub title: String,
    pub author: String,
    pub state: IssueState,
    pub body: Option<String>,
    pub url: String,
    pub labels: LabelList,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub closed_by: Option<String>,

    // Local
    pub annotations: IssueAnnotations,

    // Enrichment
    pub closing_pr_number: Option<i64>,
}

impl Issue {
    pub fn is_open(&self) -> bool {
        self.state == IssueState::Open
    }
}
