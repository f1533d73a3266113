use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid issue state: {value} {location}")]
    InvalidIssueState {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sort key: {value} {location}")]
    InvalidSortKey {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sort order: {value} {location}")]
    InvalidSortOrder {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
