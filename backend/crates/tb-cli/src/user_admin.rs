use crate::{Commands, Result as CliErrorResult};

use tb_auth::{generate_token, hash_password};
use tb_config::UsersConfig;
use tb_db::{DbError, IssueRepository, UserRepository, UserTokenRepository, run_migrations};

use log::info;
use sqlx::SqlitePool;

/// Carries out `manage-users` commands against the database
pub struct UserAdmin {
    pool: SqlitePool,
    config: UsersConfig,
}

impl UserAdmin {
    pub fn new(pool: SqlitePool, config: UsersConfig) -> Self {
        Self { pool, config }
    }

    /// Run `command` and return the line to print
    pub async fn execute(&self, command: &Commands) -> CliErrorResult<String> {
        match command {
            Commands::InitUsers => self.init_table("users").await,
            Commands::InitTokens => self.init_table("tokens").await,
            Commands::Add { username, password } => self.add_user(username, password).await,
            Commands::Token => self.issue_token().await,
            Commands::ResetKillFactor => self.reset_kill_factors().await,
        }
    }

    async fn init_table(&self, table: &str) -> CliErrorResult<String> {
        run_migrations(&self.pool).await?;
        Ok(format!("Initialized {} table in the database", table))
    }

    /// An existing username is reported, not treated as a failure
    async fn add_user(&self, username: &str, password: &str) -> CliErrorResult<String> {
        let password_hash = hash_password(password)?;

        match UserRepository::new(self.pool.clone())
            .create(username, &password_hash)
            .await
        {
            Ok(user) => {
                info!("Created user {} (id {})", user.username, user.id);
                Ok(format!("User '{}' added successfully.", username))
            }
            Err(DbError::Duplicate { .. }) => Ok(format!("User '{}' already exists.", username)),
            Err(e) => Err(e.into()),
        }
    }

    async fn issue_token(&self) -> CliErrorResult<String> {
        let token = generate_token();
        UserTokenRepository::new(self.pool.clone())
            .create(&token)
            .await?;
        info!("Issued registration token");

        Ok(self.config.registration_link(&token))
    }

    async fn reset_kill_factors(&self) -> CliErrorResult<String> {
        let cleared = IssueRepository::new(self.pool.clone())
            .clear_kill_factors()
            .await?;

        Ok(format!("Cleared kill factor on {} issues", cleared))
    }
}
