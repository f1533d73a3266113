pub mod backup;
pub mod error;
pub mod retention;

pub use backup::{PruneReport, backup_file_name, create_backup, list_backups, prune_backups};
pub use error::{BackupError, Result};
pub use retention::{BackupFile, RetentionBucket, select_backups_to_keep};
