use tb_auth::{LoginRateLimiter, PasswordPolicy, RateLimitConfig, SessionStore};
use tb_config::ServerConfig;

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub sessions: SessionStore,
    pub login_limiter: Arc<LoginRateLimiter>,
    pub password_policy: PasswordPolicy,
    /// Add `Secure` to the session cookie
    pub cookie_secure: bool,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &ServerConfig) -> Self {
        let limiter = LoginRateLimiter::new(RateLimitConfig {
            max_attempts: config.login_max_attempts,
            window_secs: config.login_window_secs,
        });

        Self {
            pool,
            sessions: SessionStore::new(Duration::from_secs(config.session_ttl_secs)),
            login_limiter: Arc::new(limiter),
            password_policy: PasswordPolicy::default(),
            cookie_secure: config.cookie_secure,
        }
    }
}
