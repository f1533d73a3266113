pub mod error;
pub mod login_rate_limiter;
pub mod password;
pub mod password_policy;
pub mod rate_limit_config;
pub mod session_store;
pub mod token;

pub use error::{AuthError, Result};
pub use login_rate_limiter::LoginRateLimiter;
pub use password::{hash_password, verify_password};
pub use password_policy::PasswordPolicy;
pub use rate_limit_config::RateLimitConfig;
pub use session_store::{Session, SessionStore};
pub use token::generate_token;
