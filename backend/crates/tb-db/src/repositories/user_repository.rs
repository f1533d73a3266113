use crate::error::is_unique_violation;
use crate::{DbError, Result as DbErrorResult};

use tb_core::User;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
        }
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a user. An existing username yields [`DbError::Duplicate`].
    pub async fn create(&self, username: &str, password_hash: &str) -> DbErrorResult<User> {
        let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(User {
                id: done.last_insert_rowid(),
                username: username.to_string(),
                password_hash: password_hash.to_string(),
            }),
            Err(e) if is_unique_violation(&e) => Err(DbError::Duplicate {
                what: "username",
                value: username.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }
}
