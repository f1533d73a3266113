use tb_config::{SyncConfig, logger};
use tb_sync::{GitHubClient, IssueSync};

use std::process::ExitCode;

use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    tb_config::load_dotenv();

    let config = match SyncConfig::from_env().and_then(|c| c.validate().map(|_| c)) {
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

    info!("Starting issue sync v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    match run(&config).await {
        Ok(()) => {
            info!("Finished issue sync");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Issue sync failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &SyncConfig) -> Result<(), Box<dyn std::error::Error>> {
    let pool = tb_db::connect(&config.database_path).await?;
    let client = GitHubClient::new(config)?;

    let report = IssueSync::new(client, pool.clone()).run().await?;
    info!(
        "Synced {} issues, {} closing PR links, watermark {}",
        report.fetched,
        report.closing_links,
        report.watermark.since_param()
    );

    pool.close().await;
    Ok(())
}
