pub mod issue_repository;
pub mod sync_status_repository;
pub mod user_repository;
pub mod user_token_repository;
