use crate::env_vars::{apply_env_bool, apply_env_parse, optional_var};
use crate::{ENV_LOG_COLORED, ENV_LOG_FILE, ENV_LOG_LEVEL, LogLevel};

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored output on stdout (ignored when logging to a file)
    pub colored: bool,
    /// Log to this file instead of stdout
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: true,
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        apply_env_parse(ENV_LOG_LEVEL, &mut config.level);
        apply_env_bool(ENV_LOG_COLORED, &mut config.colored);
        config.file = optional_var(ENV_LOG_FILE).map(PathBuf::from);
        config
    }
}
