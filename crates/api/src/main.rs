use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use findify_api::config::ServerConfig;
use findify_api::router::build_app_router;
use findify_api::state::AppState;
use findify_api::store::connect_store;
use findify_fragrance::FragranceApi;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "findify_api=debug,findify_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");
    tracing::info!(
        host = %config.host,
        port = %config.port,
        mode = config.host_mode().as_str(),
        debug = config.debug,
        "Loaded server configuration"
    );

    // --- Storage ---
    let store = connect_store(&config.brief)
        .await
        .expect("Failed to set up brief storage");

    store
        .health_check()
        .await
        .expect("Storage health check failed");
    tracing::info!(backend = store.backend(), "Storage health check passed");

    store
        .ensure_schema()
        .await
        .expect("Failed to create briefs table");
    tracing::info!("Briefs table ready");

    // --- Fragrance API ---
    let fragrance = FragranceApi::new(
        &config.fragrance.base_url,
        config.fragrance.api_host.clone(),
        config.fragrance.api_key.clone(),
    )
    .expect("Invalid fragrance API configuration");
    if !fragrance.has_api_key() {
        tracing::warn!("FRAGRANCE_API_KEY is not set; perfume search and dupe lookups will fail");
    }

    // --- App state ---
    let state = AppState::new(Arc::new(config.clone()), store, Arc::new(fragrance));

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
