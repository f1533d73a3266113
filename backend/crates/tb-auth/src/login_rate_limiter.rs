use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::num::NonZeroU32;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::keyed::DefaultKeyedStateStore,
};
use log::warn;

/// Login rate limiter keyed by submitted username.
///
/// Allows a burst of `max_attempts`, refilling one attempt every
/// `window_secs / max_attempts`.
pub struct LoginRateLimiter {
    limiter: RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>,
    config: RateLimitConfig,
}

impl LoginRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_attempts).unwrap_or(NonZeroU32::MIN);
        let period_ms = (config.window_secs.max(1) * 1000 / u64::from(burst.get())).max(1);

        let quota = Quota::with_period(Duration::from_millis(period_ms))
            .map(|q| q.allow_burst(burst))
            .unwrap_or_else(|| Quota::per_second(burst));

        Self {
            limiter: RateLimiter::keyed(quota),
            config,
        }
    }

    /// Record an attempt for `key`, failing once the quota is used up
    #[track_caller]
    pub fn check(&self, key: &str) -> AuthErrorResult<()> {
        let location = ErrorLocation::from(Location::caller());

        self.limiter.check_key(&key.to_string()).map_err(|_| {
            warn!("Login rate limit hit for '{}'", key);
            AuthError::RateLimitExceeded {
                limit: self.config.max_attempts,
                window_secs: self.config.window_secs,
                location,
            }
        })
    }

    /// Drop state for keys whose quota has fully refilled
    pub fn purge(&self) {
        self.limiter.retain_recent();
    }
}
