pub mod issue;
pub mod issue_annotations;
pub mod issue_query;
pub mod issue_sort_key;
pub mod issue_state;
pub mod label_list;
pub mod sort_order;
pub mod sync_status;
pub mod user;
pub mod user_token;
