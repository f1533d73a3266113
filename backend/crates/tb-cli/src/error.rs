use tb_auth::AuthError;
use tb_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Auth error: {source} {location}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },
}

impl From<DbError> for CliError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        CliError::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for CliError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        CliError::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
