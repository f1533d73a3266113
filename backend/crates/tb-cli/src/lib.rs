pub mod cli;
pub mod commands;
pub mod error;
pub mod user_admin;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result};
pub use user_admin::UserAdmin;
