use crate::client::wire::{
    CLOSING_PRS_QUERY, ClosingPrsData, ClosingPrsVariables, GitHubIssue, GraphQlRequest,
    GraphQlResponse,
};
use crate::{ClosingPrPage, IssuePage, IssueSource, Result as SyncErrorResult, SyncError};

use tb_config::SyncConfig;
use tb_core::{IssueState, SyncStatus, SyncedIssue};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, info};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, RequestBuilder};
use serde::de::DeserializeOwned;

const USER_AGENT: &str = "triage-board";
const GITHUB_JSON: &str = "application/vnd.github+json";

/// GitHub REST + GraphQL client for one repository
pub struct GitHubClient {
    api_url: String,
    owner: String,
    repo: String,
    page_size: u32,
    client: ReqwestClient,
}

impl GitHubClient {
    /// Build a client authenticated with the configured token
    #[track_caller]
    pub fn new(config: &SyncConfig) -> SyncErrorResult<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.github_token))
            .map_err(|_| SyncError::payload("GitHub token contains invalid header characters"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

        let client = ReqwestClient::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            owner: config.repo_owner.clone(),
            repo: config.repo_name.clone(),
            page_size: config.page_size,
            client,
        })
    }

    /// Send a request and decode a 2xx JSON body; anything else is an error
    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> SyncErrorResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let url = response.url().to_string();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(SyncError::Api {
                status: status.as_u16(),
                url,
                message: String::from_utf8_lossy(&body).chars().take(200).collect(),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl IssueSource for GitHubClient {
    async fn fetch_issue_page(
        &self,
        state: IssueState,
        page: u32,
        since: Option<SyncStatus>,
    ) -> SyncErrorResult<IssuePage> {
        info!("Fetching page {} of {} issues", page, state);

        let url = format!(
            "{}/repos/{}/{}/issues",
            self.api_url, self.owner, self.repo
        );
        let mut query = vec![
            ("state", state.as_str().to_string()),
            ("page", page.to_string()),
            ("per_page", self.page_size.to_string()),
        ];
        if let Some(since) = since {
            query.push(("since", since.since_param()));
        }

        let entries: Vec<GitHubIssue> = self.execute(self.client.get(&url).query(&query)).await?;

        let mut result = IssuePage::default();
        for entry in entries {
            if entry.is_pull_request() {
                result.pull_requests += 1;
                continue;
            }
            result.issues.push(SyncedIssue::try_from(entry)?);
        }

        debug!(
            "Page {} of {} issues: {} issues, {} pull requests",
            page,
            state,
            result.issues.len(),
            result.pull_requests
        );

        Ok(result)
    }

    async fn fetch_closing_prs(&self, cursor: Option<&str>) -> SyncErrorResult<ClosingPrPage> {
        debug!("Fetching closing PRs after {:?}", cursor);

        let request = GraphQlRequest {
            query: CLOSING_PRS_QUERY,
            variables: ClosingPrsVariables {
                owner: &self.owner,
                name: &self.repo,
                after: cursor,
            },
        };

        let url = format!("{}/graphql", self.api_url);
        let response: GraphQlResponse<ClosingPrsData> =
            self.execute(self.client.post(&url).json(&request)).await?;

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(SyncError::GraphQl {
                message: messages.join("; "),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let repository = response
            .data
            .and_then(|data| data.repository)
            .ok_or_else(|| {
                SyncError::payload(format!("repository {}/{} not found", self.owner, self.repo))
            })?;

        Ok(ClosingPrPage::from(repository.pull_requests))
    }
}
