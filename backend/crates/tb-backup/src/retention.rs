use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

const HOUR: Duration = Duration::from_secs(60 * 60);
const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// A backup file and its modification time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupFile {
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// Age windows; each keeps its most recent backup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionBucket {
    MostRecent,
    LastHour,
    LastDay,
    LastWeek,
    LastMonth,
}

impl RetentionBucket {
    pub const ALL: [RetentionBucket; 5] = [
        Self::MostRecent,
        Self::LastHour,
        Self::LastDay,
        Self::LastWeek,
        Self::LastMonth,
    ];

    /// Exclusive upper bound on age, `None` for no bound
    pub fn max_age(&self) -> Option<Duration> {
        match self {
            Self::MostRecent => None,
            Self::LastHour => Some(HOUR),
            Self::LastDay => Some(DAY),
            Self::LastWeek => Some(7 * DAY),
            Self::LastMonth => Some(30 * DAY),
        }
    }

    fn admits(&self, age: Duration) -> bool {
        self.max_age().is_none_or(|max| age < max)
    }
}

/// Backups to keep at `now`: for every bucket, the newest file whose age
/// falls in the bucket's window. Equal mtimes are broken by the later path.
///
/// Files with an mtime in the future count as age zero.
pub fn select_backups_to_keep(files: &[BackupFile], now: SystemTime) -> BTreeSet<PathBuf> {
    RetentionBucket::ALL
        .iter()
        .filter_map(|bucket| {
            files
                .iter()
                .filter(|file| {
                    let age = now.duration_since(file.modified).unwrap_or(Duration::ZERO);
                    bucket.admits(age)
                })
                .max_by(|a, b| {
                    a.modified
                        .cmp(&b.modified)
                        .then_with(|| a.path.cmp(&b.path))
                })
        })
        .map(|file| file.path.clone())
        .collect()
}
