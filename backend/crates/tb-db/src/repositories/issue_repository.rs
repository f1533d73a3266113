use crate::timestamps::{from_db, from_db_opt, to_db};
use crate::{DbError, Result as DbErrorResult};

use tb_core::{Issue, IssueAnnotations, IssueQuery, IssueState, LabelList, SyncedIssue};

use std::collections::HashMap;
use std::str::FromStr;

use log::debug;
use sqlx::{FromRow, SqlitePool};

/// Older databases may hold text such as `''` in `kill_factor`; anything
/// that is not an integer reads back as NULL.
const ISSUE_COLUMNS: &str = "id, number, title, user, state, body, url, labels, \
     created_at, updated_at, closed_at, closed_by, \
     notes, attention_of, \
     CASE WHEN typeof(kill_factor) = 'integer' THEN kill_factor END AS kill_factor, \
     closing_pr_number";

/// Whether an upsert created a new row or refreshed an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

#[derive(FromRow)]
struct IssueRow {
    id: i64,
    number: i64,
    title: String,
    user: String,
    state: String,
    body: Option<String>,
    url: String,
    labels: String,
    created_at: String,
    updated_at: String,
    closed_at: Option<String>,
    closed_by: Option<String>,
    notes: Option<String>,
    attention_of: Option<String>,
    kill_factor: Option<i64>,
    closing_pr_number: Option<i64>,
}

impl TryFrom<IssueRow> for Issue {
    type Error = DbError;

    fn try_from(row: IssueRow) -> DbErrorResult<Self> {
        let state = IssueState::from_str(&row.state)
            .map_err(|e| DbError::corrupt(format!("issue {}: {}", row.id, e)))?;

        Ok(Issue {
            id: row.id,
            number: row.number,
            title: row.title,
            author: row.user,
            state,
            body: row.body,
            url: row.url,
            labels: LabelList::from_db_string(&row.labels),
            created_at: from_db(&row.created_at)?,
            updated_at: from_db(&row.updated_at)?,
            closed_at: from_db_opt(row.closed_at.as_deref())?,
            closed_by: row.closed_by,
            annotations: IssueAnnotations {
                notes: row.notes,
                attention_of: row.attention_of,
                kill_factor: row.kill_factor,
            },
            closing_pr_number: row.closing_pr_number,
        })
    }
}

pub struct IssueRepository {
    pool: SqlitePool,
}

impl IssueRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new issue or overwrite the sync-owned fields of an existing one.
    ///
    /// Annotation columns and the closing-PR link are never touched on update,
    /// and are NULL on insert.
    pub async fn upsert_synced(&self, issue: &SyncedIssue) -> DbErrorResult<UpsertOutcome> {
        let labels = issue.labels.to_db_string();
        let created_at = to_db(&issue.created_at);
        let updated_at = to_db(&issue.updated_at);
        let closed_at = issue.closed_at.as_ref().map(to_db);

        let mut tx = self.pool.begin().await?;

        let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM issues WHERE id = ?")
            .bind(issue.id)
            .fetch_optional(&mut *tx)
            .await?;

        let outcome = if existing.is_some() {
            debug!("Updating issue {}", issue.number);
            sqlx::query(
                r#"
                UPDATE issues
                SET number = ?, title = ?, user = ?, state = ?, body = ?, url = ?,
                    labels = ?, created_at = ?, updated_at = ?, closed_at = ?, closed_by = ?
                WHERE id = ?
                "#,
            )
            .bind(issue.number)
            .bind(&issue.title)
            .bind(&issue.author)
            .bind(issue.state.as_str())
            .bind(&issue.body)
            .bind(&issue.url)
            .bind(&labels)
            .bind(&created_at)
            .bind(&updated_at)
            .bind(&closed_at)
            .bind(&issue.closed_by)
            .bind(issue.id)
            .execute(&mut *tx)
            .await?;
            UpsertOutcome::Updated
        } else {
            debug!("Inserting issue {}", issue.number);
            sqlx::query(
                r#"
                INSERT INTO issues (
                    id, number, title, user, state, body, url, labels,
                    created_at, updated_at, closed_at, closed_by,
                    notes, attention_of, kill_factor, closing_pr_number
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, NULL, NULL, NULL, NULL)
                "#,
            )
            .bind(issue.id)
            .bind(issue.number)
            .bind(&issue.title)
            .bind(&issue.author)
            .bind(issue.state.as_str())
            .bind(&issue.body)
            .bind(&issue.url)
            .bind(&labels)
            .bind(&created_at)
            .bind(&updated_at)
            .bind(&closed_at)
            .bind(&issue.closed_by)
            .execute(&mut *tx)
            .await?;
            UpsertOutcome::Inserted
        };

        tx.commit().await?;

        Ok(outcome)
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Issue>> {
        let sql = format!("SELECT {ISSUE_COLUMNS} FROM issues WHERE id = ?");

        let row = sqlx::query_as::<_, IssueRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Issue::try_from).transpose()
    }

    /// List issues matching `query`.
    ///
    /// The ORDER BY clause is built only from [`tb_core::IssueSortKey::column`]
    /// and [`tb_core::SortOrder::keyword`], never from request text. The label
    /// filter is a case-sensitive substring match on the stored label string.
    pub async fn list(&self, query: &IssueQuery) -> DbErrorResult<Vec<Issue>> {
        let sql = format!(
            "SELECT {ISSUE_COLUMNS} FROM issues \
             WHERE (? IS NULL OR instr(labels, ?) > 0) \
             ORDER BY {column} {order}, id {order}",
            column = query.sort.column(),
            order = query.order.keyword(),
        );

        let label = query.label.as_deref();

        let rows = sqlx::query_as::<_, IssueRow>(&sql)
            .bind(label)
            .bind(label)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Issue::try_from).collect()
    }

    /// Overwrite the three annotation fields. Returns false if no such issue.
    pub async fn update_annotations(
        &self,
        id: i64,
        annotations: &IssueAnnotations,
    ) -> DbErrorResult<bool> {
        let result = sqlx::query(
            "UPDATE issues SET notes = ?, attention_of = ?, kill_factor = ? WHERE id = ?",
        )
        .bind(&annotations.notes)
        .bind(&annotations.attention_of)
        .bind(annotations.kill_factor)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Replace every closing-PR link with `links` (issue number -> PR number).
    ///
    /// Runs in one transaction. Issues absent from `links` end up with no link.
    /// Returns the number of issue rows that received a link.
    pub async fn replace_closing_pr_links(&self, links: &HashMap<i64, i64>) -> DbErrorResult<u64> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE issues SET closing_pr_number = NULL WHERE closing_pr_number IS NOT NULL")
            .execute(&mut *tx)
            .await?;

        let mut linked = 0;
        for (issue_number, pr_number) in links {
            debug!("Linking issue {} to closing PR {}", issue_number, pr_number);
            let result = sqlx::query("UPDATE issues SET closing_pr_number = ? WHERE number = ?")
                .bind(pr_number)
                .bind(issue_number)
                .execute(&mut *tx)
                .await?;
            linked += result.rows_affected();
        }

        tx.commit().await?;

        Ok(linked)
    }

    /// Reset every kill factor to NULL. Returns the number of rows changed.
    pub async fn clear_kill_factors(&self) -> DbErrorResult<u64> {
        let result =
            sqlx::query("UPDATE issues SET kill_factor = NULL WHERE kill_factor IS NOT NULL")
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM issues")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
