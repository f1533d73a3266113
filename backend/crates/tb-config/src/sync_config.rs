use crate::env_vars::{optional_var, parsed_var, required_var};
use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_GITHUB_API_URL, DEFAULT_PAGE_SIZE, DEFAULT_REPO_NAME,
    DEFAULT_REPO_OWNER, ENV_DB_PATH, ENV_GITHUB_API_URL, ENV_GITHUB_TOKEN, ENV_PAGE_SIZE,
    ENV_REPO_NAME, ENV_REPO_OWNER, LoggingConfig, MAX_PAGE_SIZE, MIN_PAGE_SIZE,
};

use std::path::PathBuf;

use log::info;

/// Settings for the issue-sync job
#[derive(Clone)]
pub struct SyncConfig {
    /// Personal access token sent as a bearer token
    pub github_token: String,
    pub database_path: PathBuf,
    pub repo_owner: String,
    pub repo_name: String,
    /// REST base URL; GraphQL lives at `{api_url}/graphql`
    pub api_url: String,
    /// Issues requested per REST page
    pub page_size: u32,
    pub logging: LoggingConfig,
}

impl SyncConfig {
    /// Build from the environment. Missing required variables are an error.
    pub fn from_env() -> ConfigErrorResult<Self> {
        let github_token = required_var(ENV_GITHUB_TOKEN, "your GitHub personal access token")?;
        let database_path = PathBuf::from(required_var(ENV_DB_PATH, "the DB path")?);

        Ok(Self {
            github_token,
            database_path,
            repo_owner: optional_var(ENV_REPO_OWNER)
                .unwrap_or_else(|| String::from(DEFAULT_REPO_OWNER)),
            repo_name: optional_var(ENV_REPO_NAME)
                .unwrap_or_else(|| String::from(DEFAULT_REPO_NAME)),
            api_url: optional_var(ENV_GITHUB_API_URL)
                .unwrap_or_else(|| String::from(DEFAULT_GITHUB_API_URL))
                .trim_end_matches('/')
                .to_string(),
            page_size: parsed_var(ENV_PAGE_SIZE, DEFAULT_PAGE_SIZE)?,
            logging: LoggingConfig::from_env(),
        })
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.page_size < MIN_PAGE_SIZE || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::config(format!(
                "page size must be {}-{}, got {}",
                MIN_PAGE_SIZE, MAX_PAGE_SIZE, self.page_size
            )));
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(ConfigError::config(format!(
                "GitHub API URL must be http(s), got {}",
                self.api_url
            )));
        }

        if self.repo_owner.contains('/') || self.repo_name.contains('/') {
            return Err(ConfigError::config(
                "repository owner and name must not contain '/'",
            ));
        }

        Ok(())
    }

    /// Log configuration summary (NEVER logs the token).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  database: {}", self.database_path.display());
        info!(
            "  repository: {}/{} via {}",
            self.repo_owner, self.repo_name, self.api_url
        );
        info!("  page size: {}", self.page_size);
        info!("  logging: {}", *self.logging.level);
    }
}

impl std::fmt::Debug for SyncConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncConfig")
            .field("github_token", &"<redacted>")
            .field("database_path", &self.database_path)
            .field("repo_owner", &self.repo_owner)
            .field("repo_name", &self.repo_name)
            .field("api_url", &self.api_url)
            .field("page_size", &self.page_size)
            .field("logging", &self.logging)
            .finish()
    }
}
