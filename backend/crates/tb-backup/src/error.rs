use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("I/O error on {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Database snapshot failed: {source} {location}")]
    Database {
        #[source]
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Database file not found: {path} {location}")]
    MissingDatabase {
        path: PathBuf,
        location: ErrorLocation,
    },
}

impl BackupError {
    /// Wrap an I/O error with the path it concerns
    #[track_caller]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        BackupError::Io {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for BackupError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        BackupError::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BackupError>;
