pub mod client;
pub mod error;
pub mod issue_source;
pub mod sync_job;

pub use client::github_client::GitHubClient;
pub use error::{Result, SyncError};
pub use issue_source::{ClosingLink, ClosingPrPage, IssuePage, IssueSource};
pub use sync_job::{IssueSync, SyncReport};

#[cfg(test)]
mod tests;
