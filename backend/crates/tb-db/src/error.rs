use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Duplicate {what}: {value} {location}")]
    Duplicate {
        what: &'static str,
        value: String,
        location: ErrorLocation,
    },

    #[error("Unreadable stored value: {message} {location}")]
    Corrupt {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub(crate) fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the error is a UNIQUE constraint failure
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Duplicate { .. } => true,
            Self::Sqlx { source, .. } => is_unique_violation(source),
            _ => false,
        }
    }
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            message: format!("Migration failed: {}", err),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
