use crate::env_vars::required_var;
use crate::{ConfigErrorResult, ENV_DB_PATH, ENV_WEB_ADDR, LoggingConfig};

use std::path::PathBuf;

/// Settings for the user/token management CLI
#[derive(Debug, Clone)]
pub struct UsersConfig {
    pub database_path: PathBuf,
    /// Public base address of the web app, used to build registration links
    pub web_addr: String,
    pub logging: LoggingConfig,
}

impl UsersConfig {
    pub fn from_env() -> ConfigErrorResult<Self> {
        let database_path = PathBuf::from(required_var(ENV_DB_PATH, "the DB path")?);
        let web_addr = required_var(ENV_WEB_ADDR, "the website address")?;

        Ok(Self {
            database_path,
            web_addr,
            logging: LoggingConfig::from_env(),
        })
    }

    /// Link handed to a new user
    pub fn registration_link(&self, token: &str) -> String {
        format!(
            "{}/register?token={}",
            self.web_addr.trim_end_matches('/'),
            token
        )
    }
}
