#![allow(dead_code)]

use tb_config::{LoggingConfig, SyncConfig};

use std::path::PathBuf;

use serde_json::{Value, json};

pub const TEST_TOKEN: &str = "test-token";

/// Sync settings pointing at a mock server
pub fn test_config(api_url: &str) -> SyncConfig {
    SyncConfig {
        github_token: TEST_TOKEN.to_string(),
        database_path: PathBuf::from(":memory:"),
        repo_owner: "bitcoin".to_string(),
        repo_name: "bitcoin".to_string(),
        api_url: api_url.to_string(),
        page_size: 100,
        logging: LoggingConfig::default(),
    }
}

/// A REST issue entry as GitHub returns it
pub fn issue_json(id: i64, number: i64, state: &str, labels: &[&str]) -> Value {
    json!({
        "id": id,
        "number": number,
        "title": format!("Issue #{}", number),
        "user": { "login": "satoshi" },
        "state": state,
        "body": "Something is broken",
        "html_url": format!("https://github.com/bitcoin/bitcoin/issues/{}", number),
        "labels": labels.iter().map(|name| json!({ "name": name })).collect::<Vec<_>>(),
        "created_at": "2024-01-01T12:00:00Z",
        "updated_at": "2024-01-02T12:00:00Z",
        "closed_at": null
    })
}

/// A REST entry for a pull request (issues endpoint returns both)
pub fn pull_request_json(id: i64, number: i64) -> Value {
    let mut value = issue_json(id, number, "open", &[]);
    value["pull_request"] = json!({ "url": "https://api.github.com/repos/bitcoin/bitcoin/pulls/1" });
    value
}

/// GraphQL response body for one page of closing PRs
pub fn closing_prs_json(links: &[(i64, Vec<i64>)], end_cursor: Option<&str>, has_next: bool) -> Value {
    let nodes: Vec<Value> = links
        .iter()
        .map(|(pr, issues)| {
            json!({
                "number": pr,
                "closingIssuesReferences": {
                    "nodes": issues.iter().map(|n| json!({ "number": n })).collect::<Vec<_>>()
                }
            })
        })
        .collect();

    json!({
        "data": {
            "repository": {
                "pullRequests": {
                    "pageInfo": { "endCursor": end_cursor, "hasNextPage": has_next },
                    "nodes": nodes
                }
            }
        }
    })
}
