use pl_auth::TokenService;
use pl_config::Config;
use pl_core::{LedgerService, RewardCatalog, UserStore};
use pl_db::{PoolSettings, UserRepository};
use pl_server::error::Result as ServerErrorResult;
use pl_server::{AppState, build_router, logger};

use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting pl-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database
    let settings = PoolSettings::file(
        config.database_path()?,
        config.database.max_connections,
        Duration::from_secs(config.database.busy_timeout_secs),
    );
    let pool = pl_db::connect(&settings).await?;
    pl_db::run_migrations(&pool).await?;

    // Reward catalog, read-only from here on
    let catalog = RewardCatalog::new(config.rewards.entries())?;
    info!("Reward catalog: {} tasks", catalog.len());

    let store: Arc<dyn UserStore> = Arc::new(UserRepository::new(pool.clone()));
    let ledger = LedgerService::new(store.clone(), Arc::new(catalog));

    // Token service
    let secret = match &config.auth.jwt_secret {
        Some(secret) => secret.clone(),
        None => {
            warn!("No auth.jwt_secret configured; tokens will not survive a restart");
            uuid::Uuid::new_v4().to_string()
        }
    };
    // Bounded to a day by validate()
    let ttl = chrono::Duration::seconds(config.auth.token_ttl_secs as i64);
    let tokens = Arc::new(TokenService::with_hs256(store, secret.as_bytes(), ttl));

    let app_state = AppState {
        pool: pool.clone(),
        ledger,
        tokens,
    };

    let app = build_router(
        app_state,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
