use crate::Result as DbErrorResult;
use crate::timestamps::{from_db, to_db};

use tb_core::SyncStatus;

use sqlx::SqlitePool;

/// The watermark lives in a single row with this id
const SYNC_STATUS_ROW_ID: i64 = 1;

pub struct SyncStatusRepository {
    pool: SqlitePool,
}

impl SyncStatusRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Last successful sync, or `None` before the first one
    pub async fn get(&self) -> DbErrorResult<Option<SyncStatus>> {
        let last_sync: Option<Option<String>> =
            sqlx::query_scalar("SELECT last_sync FROM sync_status WHERE id = ?")
                .bind(SYNC_STATUS_ROW_ID)
                .fetch_optional(&self.pool)
                .await?;

        match last_sync.flatten() {
            Some(value) => Ok(Some(SyncStatus::new(from_db(&value)?))),
            None => Ok(None),
        }
    }

    pub async fn set(&self, status: &SyncStatus) -> DbErrorResult<()> {
        sqlx::query("INSERT OR REPLACE INTO sync_status (id, last_sync) VALUES (?, ?)")
            .bind(SYNC_STATUS_ROW_ID)
            .bind(to_db(&status.last_sync))
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
