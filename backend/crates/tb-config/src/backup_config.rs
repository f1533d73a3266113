use crate::env_vars::{optional_var, required_var};
use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BACKUP_DIRECTORY, ENV_BACKUP_DIR, ENV_DB_PATH,
    LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::info;

/// Settings for the backup/retention job
#[derive(Debug, Clone)]
pub struct BackupConfig {
    pub database_path: PathBuf,
    pub backup_dir: PathBuf,
    pub logging: LoggingConfig,
}

impl BackupConfig {
    pub fn from_env() -> ConfigErrorResult<Self> {
        let database_path = PathBuf::from(required_var(ENV_DB_PATH, "the DB path")?);

        let backup_dir = match optional_var(ENV_BACKUP_DIR) {
            Some(dir) => PathBuf::from(dir),
            None => database_path
                .parent()
                .map(|parent| parent.join(DEFAULT_BACKUP_DIRECTORY))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BACKUP_DIRECTORY)),
        };

        Ok(Self {
            database_path,
            backup_dir,
            logging: LoggingConfig::from_env(),
        })
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.database_path.file_name().is_none() {
            return Err(ConfigError::config(format!(
                "database path {} does not name a file",
                self.database_path.display()
            )));
        }

        if self.backup_dir == self.database_path {
            return Err(ConfigError::config(
                "backup directory must differ from the database path",
            ));
        }

        let database_dir = match self.database_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if same_directory(&self.backup_dir, database_dir) {
            return Err(ConfigError::config(format!(
                "backup directory {} must not be the database's own directory",
                self.backup_dir.display()
            )));
        }

        Ok(())
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  database: {}", self.database_path.display());
        info!("  backups: {}", self.backup_dir.display());
    }
}

/// Lexical match, or the same directory once both resolve on disk
fn same_directory(a: &Path, b: &Path) -> bool {
    let trimmed = |p: &Path| p.components().collect::<PathBuf>();
    if trimmed(a) == trimmed(b) {
        return true;
    }

    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
