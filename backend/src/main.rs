//! MindTrack Backend
//!
//! A patient-management backend for mental-health clinicians.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! - Routes: HTTP request handling and routing
//! - Services: Business logic (listing, profile, insights, live stream)
//! - Store: In-memory mock patient data, seeded deterministically
//! - AI: Completion-service client for insight generation

use anyhow::Result;
use mindtrack_backend::ai::OllamaClient;
use mindtrack_backend::generator::MockDataProvider;
use mindtrack_backend::store::PatientStore;
use mindtrack_backend::{config, routes, state::AppState};
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() {
            "production"
        } else {
            "development"
        },
        "Starting MindTrack Backend"
    );

    // Seed the mock patient store
    let provider = MockDataProvider::new(config.mock.seed, config.mock.wearable_days);
    let store = PatientStore::new(provider);
    info!(
        patients = store.patient_count(),
        seed = config.mock.seed,
        "Mock patient store ready"
    );

    // Completion client for the insight flow
    let completion = OllamaClient::new(
        &config.ai.base_url,
        &config.ai.model,
        Duration::from_secs(config.ai.timeout_secs),
    )
    .map_err(|e| anyhow::anyhow!("failed to build completion client: {}", e))?;

    // Create application state
    let state = AppState::new(store, Arc::new(completion), config.clone());

    // Build application
    let app = routes::create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "mindtrack_backend=info,tower_http=info".into()
        } else {
            "mindtrack_backend=debug,tower_http=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
