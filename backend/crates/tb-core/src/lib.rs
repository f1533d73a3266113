pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::issue::{Issue, SyncedIssue};
pub use models::issue_annotations::IssueAnnotations;
pub use models::issue_query::IssueQuery;
pub use models::issue_sort_key::IssueSortKey;
pub use models::issue_state::IssueState;
pub use models::label_list::{LABEL_DELIMITER, LabelList};
pub use models::sort_order::SortOrder;
pub use models::sync_status::{SyncStatus, WATERMARK_FORMAT};
pub use models::user::User;
pub use models::user_token::UserToken;
