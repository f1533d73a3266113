use crate::retention::{BackupFile, select_backups_to_keep};
use crate::{BackupError, Result as BackupErrorResult};

use std::fs::{self, File};
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Local};
use error_location::ErrorLocation;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteJournalMode};
use sqlx::{Connection, Row};

const BACKUP_EXTENSION: &str = "db";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const SNAPSHOT_BUSY_TIMEOUT: Duration = Duration::from_secs(30);

/// What a pruning pass kept and removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
    pub kept: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
}

/// `<db file name>_backup_`, the prefix shared by every backup of this database
fn backup_prefix(database_path: &Path) -> String {
    let db_name = database_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "database".to_string());

    format!("{}_backup_", db_name)
}

/// `<db file name>_backup_<YYYYmmdd_HHMMSS>.db`
pub fn backup_file_name(database_path: &Path, taken_at: DateTime<Local>) -> String {
    format!(
        "{}{}.{}",
        backup_prefix(database_path),
        taken_at.format(BACKUP_TIMESTAMP_FORMAT),
        BACKUP_EXTENSION
    )
}

/// Copy the database into `backup_dir` (created if missing), keeping the
/// source's modification time on the copy. Returns the backup path.
///
/// The copy runs inside a SQLite read transaction. Its SHARED lock keeps
/// writers from committing until the copy is done, so the file never holds
/// a half-written commit.
pub async fn create_backup(
    database_path: &Path,
    backup_dir: &Path,
    taken_at: DateTime<Local>,
) -> BackupErrorResult<PathBuf> {
    if !database_path.is_file() {
        return Err(BackupError::MissingDatabase {
            path: database_path.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    fs::create_dir_all(backup_dir).map_err(|e| BackupError::io(backup_dir, e))?;

    let backup_path = backup_dir.join(backup_file_name(database_path, taken_at));

    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(false)
        .journal_mode(SqliteJournalMode::Delete)
        .busy_timeout(SNAPSHOT_BUSY_TIMEOUT);
    let mut conn = SqliteConnection::connect_with(&options).await?;

    let mut snapshot = conn.begin().await?;
    let tables: i64 = sqlx::query("SELECT COUNT(*) FROM sqlite_master")
        .fetch_one(&mut *snapshot)
        .await?
        .try_get(0)?;
    debug!(
        "Holding read lock on {} ({} schema entries)",
        database_path.display(),
        tables
    );

    let copied = fs::copy(database_path, &backup_path);

    snapshot.rollback().await?;
    conn.close().await?;
    copied.map_err(|e| BackupError::io(&backup_path, e))?;

    let modified = fs::metadata(database_path)
        .and_then(|meta| meta.modified())
        .map_err(|e| BackupError::io(database_path, e))?;
    File::options()
        .write(true)
        .open(&backup_path)
        .and_then(|file| file.set_modified(modified))
        .map_err(|e| BackupError::io(&backup_path, e))?;

    info!("Database backup created: {}", backup_path.display());

    Ok(backup_path)
}

/// Every backup of `database_path` directly inside `backup_dir`: regular
/// files named `<db file name>_backup_*.db`. Anything else is left alone.
pub fn list_backups(
    database_path: &Path,
    backup_dir: &Path,
) -> BackupErrorResult<Vec<BackupFile>> {
    let prefix = backup_prefix(database_path);
    let suffix = format!(".{}", BACKUP_EXTENSION);
    let entries = fs::read_dir(backup_dir).map_err(|e| BackupError::io(backup_dir, e))?;

    let mut backups = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BackupError::io(backup_dir, e))?;
        let path = entry.path();

        let is_backup = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(&prefix) && name.ends_with(&suffix));
        if !is_backup {
            continue;
        }

        let metadata = entry.metadata().map_err(|e| BackupError::io(&path, e))?;
        if !metadata.is_file() {
            continue;
        }

        let modified = metadata.modified().map_err(|e| BackupError::io(&path, e))?;
        backups.push(BackupFile { path, modified });
    }

    backups.sort_by(|a, b| a.path.cmp(&b.path));
    debug!("Found {} backups in {}", backups.len(), backup_dir.display());

    Ok(backups)
}

/// Delete every backup of `database_path` not selected by the retention buckets
pub fn prune_backups(
    database_path: &Path,
    backup_dir: &Path,
    now: SystemTime,
) -> BackupErrorResult<PruneReport> {
    let backups = list_backups(database_path, backup_dir)?;
    let keep = select_backups_to_keep(&backups, now);

    let mut report = PruneReport::default();
    for backup in backups {
        if keep.contains(&backup.path) {
            report.kept.push(backup.path);
            continue;
        }

        fs::remove_file(&backup.path).map_err(|e| BackupError::io(&backup.path, e))?;
        info!("Removed backup: {}", backup.path.display());
        report.removed.push(backup.path);
    }

    Ok(report)
}
