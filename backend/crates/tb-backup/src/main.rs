use tb_backup::{create_backup, prune_backups};
use tb_config::{BackupConfig, logger};

use std::process::ExitCode;
use std::time::SystemTime;

use chrono::Local;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    tb_config::load_dotenv();

    let config = match BackupConfig::from_env().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(&config.logging) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    config.log_summary();

    let backup = create_backup(&config.database_path, &config.backup_dir, Local::now()).await;
    if let Err(e) = backup {
        error!("Backup failed: {}", e);
        return ExitCode::FAILURE;
    }

    match prune_backups(&config.database_path, &config.backup_dir, SystemTime::now()) {
        Ok(report) => {
            info!(
                "Retention pass done: {} kept, {} removed",
                report.kept.len(),
                report.removed.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Pruning backups failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
