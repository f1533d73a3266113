use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

const DEFAULT_MIN_LENGTH: usize = 8;

/// Strength rules for self-registered passwords
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl PasswordPolicy {
    /// Every unmet rule is reported, not just the first
    #[track_caller]
    pub fn check(&self, password: &str) -> AuthErrorResult<()> {
        let mut failures = Vec::new();

        if password.chars().count() < self.min_length {
            failures.push(format!("must be at least {} characters", self.min_length));
        }
        if !password.chars().any(|c| c.is_uppercase()) {
            failures.push("must contain an uppercase letter".to_string());
        }
        if !password.chars().any(|c| c.is_lowercase()) {
            failures.push("must contain a lowercase letter".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            failures.push("must contain a digit".to_string());
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(AuthError::WeakPassword {
                reasons: failures.join(", "),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }

    /// Policy check plus confirmation match
    #[track_caller]
    pub fn check_with_confirmation(&self, password: &str, confirmation: &str) -> AuthErrorResult<()> {
        if password != confirmation {
            return Err(AuthError::PasswordMismatch {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.check(password)
    }
}
