//! Web error types
//!
//! Every error renders as an HTML error page with the matching status code.
//! Internal details are logged, never shown.

use crate::web::views;

use tb_auth::AuthError;
use tb_core::CoreError;
use tb_db::DbError;

use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    /// Malformed or rejected input (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Missing session or bad credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Unknown resource (404)
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Login rate limit hit (429)
    #[error("Too many requests: {message} {location}")]
    TooManyRequests {
        message: String,
        location: ErrorLocation,
    },

    /// Anything else (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl WebError {
    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::TooManyRequests { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::BadRequest { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::NotFound { message, .. }
            | Self::TooManyRequests { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let page = views::error_page::render(status, self.message());
        (status, Html(page)).into_response()
    }
}

/// Database failures surface as a generic 500
impl From<DbError> for WebError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);
        Self::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for WebError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let message = e.user_message();

        match e {
            AuthError::WeakPassword { .. } | AuthError::PasswordMismatch { .. } => {
                Self::BadRequest { message, location }
            }
            AuthError::RateLimitExceeded { .. } => Self::TooManyRequests { message, location },
            AuthError::PasswordHash { .. } => {
                log::error!("Password hashing failed: {}", e);
                Self::Internal { message, location }
            }
        }
    }
}

/// A blocking task (password hashing) panicked or was cancelled
impl From<tokio::task::JoinError> for WebError {
    #[track_caller]
    fn from(e: tokio::task::JoinError) -> Self {
        log::error!("Blocking task failed: {}", e);
        Self::Internal {
            message: "Request could not be completed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Rejected query parameters (unknown sort key or order)
impl From<CoreError> for WebError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let message = match &e {
            CoreError::InvalidSortKey { value, .. } => format!("Unknown sort key '{}'", value),
            CoreError::InvalidSortOrder { value, .. } => format!("Unknown sort order '{}'", value),
            CoreError::InvalidIssueState { value, .. } => format!("Unknown issue state '{}'", value),
        };

        Self::BadRequest {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type WebResult<T> = std::result::Result<T, WebError>;
