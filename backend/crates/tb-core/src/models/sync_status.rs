use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Format of the `since` watermark sent to the remote API
pub const WATERMARK_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Singleton row holding the last successful sync watermark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncStatus {
    pub last_sync: DateTime<Utc>,
}

impl SyncStatus {
    pub fn new(last_sync: DateTime<Utc>) -> Self {
        Self {
            last_sync: last_sync.trunc_subsecs(0),
        }
    }

    /// Watermark as the remote API expects it
    pub fn since_param(&self) -> String {
        self.last_sync.format(WATERMARK_FORMAT).to_string()
    }

    /// Next watermark after a successful run started at `run_started_at`.
    /// Never moves backwards, even if the clock did.
    pub fn advance(previous: Option<SyncStatus>, run_started_at: DateTime<Utc>) -> Self {
        let candidate = Self::new(run_started_at);
        match previous {
            Some(prev) if prev.last_sync > candidate.last_sync => prev,
            _ => candidate,
        }
    }
}
