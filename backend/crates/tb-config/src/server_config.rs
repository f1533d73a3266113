use crate::env_vars::{apply_env_bool, optional_var, parsed_var, required_var};
use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BIND_ADDR, DEFAULT_LOGIN_MAX_ATTEMPTS,
    DEFAULT_LOGIN_WINDOW_SECS, DEFAULT_SESSION_TTL_SECS, ENV_BIND_ADDR, ENV_COOKIE_SECURE,
    ENV_DB_PATH, ENV_LOGIN_MAX_ATTEMPTS, ENV_LOGIN_WINDOW_SECS, ENV_SESSION_TTL_SECS,
    LoggingConfig, MAX_LOGIN_MAX_ATTEMPTS, MAX_LOGIN_WINDOW_SECS, MIN_LOGIN_MAX_ATTEMPTS,
    MIN_LOGIN_WINDOW_SECS, MIN_SESSION_TTL_SECS,
};

use std::net::SocketAddr;
use std::path::PathBuf;

use log::info;

/// Settings for the web application
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_path: PathBuf,
    pub bind_addr: SocketAddr,
    /// Login attempts allowed per username within the window
    pub login_max_attempts: u32,
    pub login_window_secs: u64,
    pub session_ttl_secs: u64,
    /// Mark the session cookie `Secure` (behind TLS)
    pub cookie_secure: bool,
    pub logging: LoggingConfig,
}

impl ServerConfig {
    pub fn from_env() -> ConfigErrorResult<Self> {
        let database_path = PathBuf::from(required_var(ENV_DB_PATH, "the DB path")?);

        let bind_addr_raw =
            optional_var(ENV_BIND_ADDR).unwrap_or_else(|| String::from(DEFAULT_BIND_ADDR));
        let bind_addr = bind_addr_raw
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidVar {
                name: ENV_BIND_ADDR,
                value: bind_addr_raw.clone(),
                message: e.to_string(),
            })?;

        let mut cookie_secure = false;
        apply_env_bool(ENV_COOKIE_SECURE, &mut cookie_secure);

        Ok(Self {
            database_path,
            bind_addr,
            login_max_attempts: parsed_var(ENV_LOGIN_MAX_ATTEMPTS, DEFAULT_LOGIN_MAX_ATTEMPTS)?,
            login_window_secs: parsed_var(ENV_LOGIN_WINDOW_SECS, DEFAULT_LOGIN_WINDOW_SECS)?,
            session_ttl_secs: parsed_var(ENV_SESSION_TTL_SECS, DEFAULT_SESSION_TTL_SECS)?,
            cookie_secure,
            logging: LoggingConfig::from_env(),
        })
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.login_max_attempts < MIN_LOGIN_MAX_ATTEMPTS
            || self.login_max_attempts > MAX_LOGIN_MAX_ATTEMPTS
        {
            return Err(ConfigError::server(format!(
                "login max attempts must be {}-{}, got {}",
                MIN_LOGIN_MAX_ATTEMPTS, MAX_LOGIN_MAX_ATTEMPTS, self.login_max_attempts
            )));
        }

        if self.login_window_secs < MIN_LOGIN_WINDOW_SECS
            || self.login_window_secs > MAX_LOGIN_WINDOW_SECS
        {
            return Err(ConfigError::server(format!(
                "login window must be {}-{} seconds, got {}",
                MIN_LOGIN_WINDOW_SECS, MAX_LOGIN_WINDOW_SECS, self.login_window_secs
            )));
        }

        if self.session_ttl_secs < MIN_SESSION_TTL_SECS {
            return Err(ConfigError::server(format!(
                "session TTL must be at least {} seconds, got {}",
                MIN_SESSION_TTL_SECS, self.session_ttl_secs
            )));
        }

        Ok(())
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}", self.bind_addr);
        info!("  database: {}", self.database_path.display());
        info!(
            "  login rate limit: {}/{}s",
            self.login_max_attempts, self.login_window_secs
        );
        info!(
            "  sessions: ttl={}s secure_cookie={}",
            self.session_ttl_secs, self.cookie_secure
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }
}
