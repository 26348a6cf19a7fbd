use clap::Parser;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

use wallet_api::config::{Config, StoreBackend};
use wallet_api::{create_router, database, AppState, InMemoryStore, PgStore};

#[derive(Parser, Debug)]
#[command(name = "wallet-api", about = "HTTP service for user wallets")]
struct Args {
    /// Listen port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Storage backend (overrides STORE_BACKEND)
    #[arg(long, value_enum)]
    store: Option<StoreBackend>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wallet_api=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting Wallet API server...");

    let args = Args::parse();
    let mut config = Config::from_env()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(store) = args.store {
        config.store_backend = store;
    }
    let config = Arc::new(config);
    info!("Configuration loaded (store backend: {})", config.store_backend);

    let app_state = match config.store_backend {
        StoreBackend::Postgres => {
            let db_pool =
                database::connect(&config.database_url, config.database_max_connections).await?;
            AppState::new(PgStore::new(db_pool))
        }
        StoreBackend::Memory => {
            info!("Using in-memory wallet store; data is lost on shutdown");
            AppState::new(InMemoryStore::new())
        }
    };

    let app = create_router(app_state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
    }

    info!("Shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use signal::unix::{signal as unix_signal, SignalKind};

        match unix_signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    result = signal::ctrl_c() => log_ctrl_c(result),
                    _ = sigterm.recv() => info!("SIGTERM received"),
                }
            }
            Err(e) => {
                warn!("Cannot listen for SIGTERM ({}); waiting for Ctrl+C only", e);
                log_ctrl_c(signal::ctrl_c().await);
            }
        }
    }

    #[cfg(not(unix))]
    log_ctrl_c(signal::ctrl_c().await);

    info!("Draining in-flight requests");
}

fn log_ctrl_c(result: std::io::Result<()>) {
    match result {
        Ok(()) => info!("Ctrl+C received"),
        Err(e) => error!("Ctrl+C listener failed: {}", e),
    }
}
