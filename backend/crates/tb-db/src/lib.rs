pub mod connection;
pub mod error;
pub mod repositories;

mod timestamps;

pub use connection::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::issue_repository::{IssueRepository, UpsertOutcome};
pub use repositories::sync_status_repository::SyncStatusRepository;
pub use repositories::user_repository::UserRepository;
pub use repositories::user_token_repository::{RegistrationOutcome, UserTokenRepository};

use sqlx::migrate::Migrator;

/// Schema migrations embedded at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
