use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Password does not meet requirements: {reasons} {location}")]
    WeakPassword {
        reasons: String,
        location: ErrorLocation,
    },

    #[error("Passwords do not match {location}")]
    PasswordMismatch { location: ErrorLocation },

    #[error("Rate limit exceeded: {limit} attempts per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Message safe to show to the person at the keyboard
    pub fn user_message(&self) -> String {
        match self {
            Self::PasswordHash { .. } => "Something went wrong, please try again.".to_string(),
            Self::WeakPassword { reasons, .. } => format!("Password {}.", reasons),
            Self::PasswordMismatch { .. } => "Passwords do not match.".to_string(),
            Self::RateLimitExceeded { window_secs, .. } => format!(
                "Too many login attempts. Try again in {} seconds.",
                window_secs
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
