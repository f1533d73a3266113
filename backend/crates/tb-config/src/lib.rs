mod backup_config;
mod env_vars;
mod error;
mod log_level;
pub mod logger;
mod logging_config;
mod server_config;
mod sync_config;
mod users_config;

#[cfg(test)]
mod tests;

pub use backup_config::BackupConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use sync_config::SyncConfig;
pub use users_config::UsersConfig;

// Environment variables
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_DB_PATH: &str = "TB_DB_PATH";
pub const ENV_WEB_ADDR: &str = "TB_WEB_ADDR";
pub const ENV_REPO_OWNER: &str = "TB_REPO_OWNER";
pub const ENV_REPO_NAME: &str = "TB_REPO_NAME";
pub const ENV_GITHUB_API_URL: &str = "TB_GITHUB_API_URL";
pub const ENV_PAGE_SIZE: &str = "TB_PAGE_SIZE";
pub const ENV_BIND_ADDR: &str = "TB_BIND_ADDR";
pub const ENV_LOGIN_MAX_ATTEMPTS: &str = "TB_LOGIN_MAX_ATTEMPTS";
pub const ENV_LOGIN_WINDOW_SECS: &str = "TB_LOGIN_WINDOW_SECS";
pub const ENV_SESSION_TTL_SECS: &str = "TB_SESSION_TTL_SECS";
pub const ENV_COOKIE_SECURE: &str = "TB_COOKIE_SECURE";
pub const ENV_BACKUP_DIR: &str = "TB_BACKUP_DIR";
pub const ENV_LOG_LEVEL: &str = "TB_LOG_LEVEL";
pub const ENV_LOG_COLORED: &str = "TB_LOG_COLORED";
pub const ENV_LOG_FILE: &str = "TB_LOG_FILE";

// Defaults
const DEFAULT_REPO_OWNER: &str = "bitcoin";
const DEFAULT_REPO_NAME: &str = "bitcoin";
const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_PAGE_SIZE: u32 = 100;
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_LOGIN_MAX_ATTEMPTS: u32 = 5;
const DEFAULT_LOGIN_WINDOW_SECS: u64 = 60;
const DEFAULT_SESSION_TTL_SECS: u64 = 7 * 24 * 60 * 60;
const DEFAULT_BACKUP_DIRECTORY: &str = "db_backups";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

// Constraints
const MIN_PAGE_SIZE: u32 = 1;
const MAX_PAGE_SIZE: u32 = 100;
const MIN_LOGIN_MAX_ATTEMPTS: u32 = 1;
const MAX_LOGIN_MAX_ATTEMPTS: u32 = 1000;
const MIN_LOGIN_WINDOW_SECS: u64 = 1;
const MAX_LOGIN_WINDOW_SECS: u64 = 3600;
const MIN_SESSION_TTL_SECS: u64 = 60;

/// Load a development `.env` file if one exists. Call before reading any config.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}
