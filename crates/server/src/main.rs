use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use titulky_core::{
    load_config, validate_config, DebridClient, OmdbClient, RealDebridClient, TitleLookup,
};
use titulky_server::{api::create_router, state::AppState};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("TITULKY_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    let config_json = serde_json::to_string(&config).unwrap_or_default();
    let config_hash = format!("{:x}", Sha256::digest(config_json.as_bytes()));
    info!(
        "Configuration loaded (version {}, config hash {})",
        VERSION,
        &config_hash[..16]
    );
    info!(
        "Addon {} serving top {} results",
        config.addon.id, config.addon.top_n
    );

    // Create title lookup if configured
    let title_lookup: Option<Arc<dyn TitleLookup>> = match &config.title_lookup {
        Some(omdb_config) => match OmdbClient::new(omdb_config) {
            Ok(client) => {
                info!("Initializing OMDb title lookup at {}", omdb_config.base_url);
                Some(Arc::new(client))
            }
            Err(e) => {
                error!("Failed to create OMDb client: {}", e);
                None
            }
        },
        None => {
            info!("No title lookup configured");
            None
        }
    };

    // Create debrid client if configured
    let debrid: Option<Arc<dyn DebridClient>> = match &config.debrid {
        Some(rd_config) => match RealDebridClient::new(rd_config) {
            Ok(client) => {
                info!("Initializing Real-Debrid client at {}", rd_config.base_url);
                Some(Arc::new(client))
            }
            Err(e) => {
                error!("Failed to create Real-Debrid client: {}", e);
                None
            }
        },
        None => {
            info!("No debrid client configured");
            None
        }
    };

    // Create app state
    let state = Arc::new(AppState::new(config.clone(), title_lookup, debrid));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
