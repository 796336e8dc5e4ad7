//! Weather map HTTP server
//!
//! Main entry point for the proxy API server.

use std::time::Duration;

use anyhow::Context;
use infrastructure::{AppConfig, init_logging};
use presentation_http::{
    ShutdownOutcome, cors_layer, routes, serve_with_deadline, state::AppState,
};
use tokio::{net::TcpListener, signal};
use tokio_util::sync::CancellationToken;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before logging so the log format can come from it
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(&config.server).context("Failed to initialize logging")?;

    info!("🌦️ Weather map v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }

    info!(
        host = %config.server.host,
        port = %config.server.port,
        forecast = %config.upstream.forecast_base_url,
        timeout_secs = config.upstream.timeout_secs,
        cache = config.cache.enabled,
        "Configuration loaded"
    );

    let state = AppState::from_config(&config).context("Failed to initialize upstream client")?;

    // Build router (first layer = outermost)
    let app = routes::create_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config.server.allowed_origins)),
    );

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown = CancellationToken::new();
    tokio::spawn(shutdown_signal(shutdown.clone()));

    let server =
        axum::serve(listener, app).with_graceful_shutdown(shutdown.clone().cancelled_owned());
    let deadline = config.server.shutdown_timeout_secs.map(Duration::from_secs);

    match serve_with_deadline(server, shutdown, deadline).await? {
        ShutdownOutcome::Drained => info!("👋 Server shutdown complete"),
        ShutdownOutcome::DeadlineElapsed => {
            warn!("👋 Server shutdown forced, open connections dropped");
        },
    }

    Ok(())
}

/// Wait for SIGINT or SIGTERM, then fire `shutdown`
async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    shutdown.cancel();
}
