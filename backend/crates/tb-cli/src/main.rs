use tb_cli::{Cli, UserAdmin};
use tb_config::{UsersConfig, logger};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tb_config::load_dotenv();

    let config = match UsersConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.verbose
        && let Err(e) = logger::initialize(&config.logging)
    {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let pool = match tb_db::connect(&config.database_path).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let admin = UserAdmin::new(pool.clone(), config);
    let result = admin.execute(&cli.command).await;
    pool.close().await;

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
