use crate::error::is_unique_violation;
use crate::{DbError, Result as DbErrorResult};

use tb_core::{User, UserToken};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use sqlx::{FromRow, SqlitePool};

/// Result of trying to register with a one-time token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered(User),
    /// Token unknown or already consumed
    TokenUnavailable,
    /// Username exists; the token was left unused
    UsernameTaken,
}

#[derive(FromRow)]
struct UserTokenRow {
    id: i64,
    token: String,
    used: bool,
}

impl From<UserTokenRow> for UserToken {
    fn from(row: UserTokenRow) -> Self {
        UserToken {
            id: row.id,
            token: row.token,
            used: row.used,
        }
    }
}

pub struct UserTokenRepository {
    pool: SqlitePool,
}

impl UserTokenRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a fresh, unused token
    pub async fn create(&self, token: &str) -> DbErrorResult<UserToken> {
        let result = sqlx::query("INSERT INTO user_tokens (token, used) VALUES (?, 0)")
            .bind(token)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(UserToken {
                id: done.last_insert_rowid(),
                token: token.to_string(),
                used: false,
            }),
            Err(e) if is_unique_violation(&e) => Err(DbError::Duplicate {
                what: "token",
                value: token.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// The token, if it exists and has not been used
    pub async fn find_available(&self, token: &str) -> DbErrorResult<Option<UserToken>> {
        let row = sqlx::query_as::<_, UserTokenRow>(
            "SELECT id, token, used FROM user_tokens WHERE token = ? AND used = 0",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserToken::from))
    }

    /// Consume `token` and create the user in one transaction.
    ///
    /// The token is claimed with a conditional update, so two concurrent
    /// registrations cannot both consume it. On a duplicate username the
    /// transaction rolls back and the token stays available.
    pub async fn register_with_token(
        &self,
        token: &str,
        username: &str,
        password_hash: &str,
    ) -> DbErrorResult<RegistrationOutcome> {
        let mut tx = self.pool.begin().await?;

        let claimed = sqlx::query("UPDATE user_tokens SET used = 1 WHERE token = ? AND used = 0")
            .bind(token)
            .execute(&mut *tx)
            .await?;

        if claimed.rows_affected() != 1 {
            tx.rollback().await?;
            debug!("Registration token unavailable");
            return Ok(RegistrationOutcome::TokenUnavailable);
        }

        let inserted = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(&mut *tx)
            .await;

        match inserted {
            Ok(done) => {
                tx.commit().await?;
                Ok(RegistrationOutcome::Registered(User {
                    id: done.last_insert_rowid(),
                    username: username.to_string(),
                    password_hash: password_hash.to_string(),
                }))
            }
            Err(e) if is_unique_violation(&e) => {
                tx.rollback().await?;
                Ok(RegistrationOutcome::UsernameTaken)
            }
            Err(e) => Err(e.into()),
        }
    }
}
