use tb_config::{ServerConfig, logger};
use tb_server::{AppState, ServerError, build_router};

use std::process::ExitCode;
use std::time::Duration;

use log::{debug, error, info};
use tokio::net::TcpListener;

const PURGE_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() -> ExitCode {
    tb_config::load_dotenv();

    let config = match ServerConfig::from_env().and_then(|c| c.validate().map(|_| c)) {
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

    info!("Starting tb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    match run(&config).await {
        Ok(()) => {
            info!("Server stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Server failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &ServerConfig) -> Result<(), ServerError> {
    info!("Connecting to database: {}", config.database_path.display());
    let pool = tb_db::connect(&config.database_path).await?;

    let state = AppState::new(pool.clone(), config);

    // Expired sessions and idle rate-limit keys
    let sessions = state.sessions.clone();
    let limiter = state.login_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let removed = sessions.purge_expired().await;
            limiter.purge();
            if removed > 0 {
                debug!("Purged {} expired sessions", removed);
            }
        }
    });

    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind_addr.to_string(),
            source,
        })?;
    info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received Ctrl+C, shutting down"),
                Err(e) => {
                    error!("Failed to listen for Ctrl+C: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    pool.close().await;
    Ok(())
}
