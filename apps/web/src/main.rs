//! # Stockroom Web Server
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ── EnvFilter, default INFO, RUST_LOG overrides   │
//! │  2. Load Configuration ── STOCKROOM_* environment variables            │
//! │  3. Connect to Database ── SQLite (WAL) + pending migrations           │
//! │  4. Seed (optional) ──── reference products into an empty table        │
//! │  5. Serve ────────────── until Ctrl+C / SIGTERM, then close the pool   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use stockroom_core::{Product, SharedRepository};
use stockroom_db::seed::{reference_products, seed_if_empty};
use stockroom_db::Database;
use stockroom_web::{build_router, AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Stockroom web server");

    let config = AppConfig::load()?;
    info!(
        addr = %config.bind_address(),
        database = %config.database_path.display(),
        "Configuration loaded"
    );

    let db = Database::new(config.db_config()).await?;
    info!("Database connected");

    if config.seed_sample_data {
        seed_if_empty(&db.products(), reference_products()).await?;
    }

    let repo: SharedRepository<Product> = Arc::new(db.products());
    let app = build_router(AppState::new(repo));

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!(addr = %config.bind_address(), "Listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    db.close().await;
    served?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_db=debug` - Show repository queries only
/// - Default: INFO, with per-request spans from `tower_http`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
