//! JSON shapes returned by the GitHub REST and GraphQL APIs (only the fields we read)

use crate::{ClosingLink, ClosingPrPage, Result as SyncErrorResult, SyncError};

use tb_core::{IssueState, LabelList, SyncedIssue};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GitHubUser {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct GitHubLabel {
    pub name: String,
}

/// An entry of `GET /repos/{owner}/{repo}/issues`
#[derive(Debug, Deserialize)]
pub struct GitHubIssue {
    pub id: i64,
    pub number: i64,
    pub title: String,
    pub user: Option<GitHubUser>,
    pub state: String,
    pub body: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub labels: Vec<GitHubLabel>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub closed_by: Option<GitHubUser>,
    /// Present only on pull requests
    pub pull_request: Option<serde_json::Value>,
}

impl GitHubIssue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// Deleted accounts come back as a null user
const GHOST_LOGIN: &str = "ghost";

impl TryFrom<GitHubIssue> for SyncedIssue {
    type Error = SyncError;

    fn try_from(issue: GitHubIssue) -> SyncErrorResult<Self> {
        let state = IssueState::from_str(&issue.state).map_err(|_| {
            SyncError::payload(format!(
                "issue #{} has unknown state '{}'",
                issue.number, issue.state
            ))
        })?;

        Ok(SyncedIssue {
            id: issue.id,
            number: issue.number,
            title: issue.title,
            author: issue
                .user
                .map(|u| u.login)
                .unwrap_or_else(|| GHOST_LOGIN.to_string()),
            state,
            body: issue.body,
            url: issue.html_url,
            labels: LabelList::from_names(issue.labels.iter().map(|l| l.name.as_str())),
            created_at: issue.created_at,
            updated_at: issue.updated_at,
            closed_at: issue.closed_at,
            closed_by: issue.closed_by.map(|u| u.login),
        })
    }
}

pub const CLOSING_PRS_QUERY: &str = r#"
query($owner: String!, $name: String!, $after: String) {
  repository(owner: $owner, name: $name) {
    pullRequests(first: 100, after: $after, states: [OPEN]) {
      pageInfo {
        endCursor
        hasNextPage
      }
      nodes {
        number
        closingIssuesReferences(first: 100) {
          nodes {
            number
          }
        }
      }
    }
  }
}
"#;

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Serialize)]
pub struct ClosingPrsVariables<'a> {
    pub owner: &'a str,
    pub name: &'a str,
    pub after: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ClosingPrsData {
    pub repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    pub pull_requests: PullRequestConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestConnection {
    pub page_info: PageInfo,
    pub nodes: Vec<PullRequestNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestNode {
    pub number: i64,
    pub closing_issues_references: IssueReferenceConnection,
}

#[derive(Debug, Deserialize)]
pub struct IssueReferenceConnection {
    pub nodes: Vec<IssueReferenceNode>,
}

#[derive(Debug, Deserialize)]
pub struct IssueReferenceNode {
    pub number: i64,
}

impl From<PullRequestConnection> for ClosingPrPage {
    fn from(connection: PullRequestConnection) -> Self {
        let links = connection
            .nodes
            .iter()
            .flat_map(|pr| {
                pr.closing_issues_references
                    .nodes
                    .iter()
                    .map(move |issue| ClosingLink {
                        issue_number: issue.number,
                        pr_number: pr.number,
                    })
            })
            .collect();

        ClosingPrPage {
            links,
            end_cursor: connection.page_info.end_cursor,
            has_next_page: connection.page_info.has_next_page,
        }
    }
}
