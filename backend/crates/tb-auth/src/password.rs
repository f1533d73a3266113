use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use error_location::ErrorLocation;
use log::warn;

/// Hash `password` with Argon2id and a random salt, in PHC string format
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

const BCRYPT_PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

/// Check `password` against a stored PHC hash. A malformed hash never verifies.
///
/// bcrypt hashes from older user tables are not accepted; those accounts
/// have to be deleted and added again.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    if BCRYPT_PREFIXES
        .iter()
        .any(|prefix| stored_hash.starts_with(prefix))
    {
        warn!("Stored password hash is bcrypt, which is no longer supported; delete and re-add the user");
        return false;
    }

    let parsed = match PasswordHash::new(stored_hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Stored password hash is malformed: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
