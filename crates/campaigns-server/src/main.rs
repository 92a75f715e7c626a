//! Campaigns API Server
//!
//! Loads the campaign collection once, then serves the read-only listing.

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campaigns_api::AppState;
use campaigns_core::config::AppConfig;
use campaigns_models::{CampaignRepository, InMemoryCampaignRepository};

mod health;

use health::HealthChecker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first, so RUST_LOG set there drives the log filter
    dotenvy::dotenv().ok();

    // Initialize structured logging
    init_tracing();

    // Load configuration
    let config = AppConfig::from_env().context("Invalid configuration")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.server.host,
        port = config.server.port,
        default_limit = config.limits.default_limit,
        max_limit = config.limits.max_limit,
        "Starting Campaigns API"
    );

    let repository = load_repository(&config)?;
    info!(campaigns = repository.count()?, "Campaign collection ready");

    let app = build_router(
        AppState::new(repository.clone(), config.limits),
        Arc::new(HealthChecker::new(repository)),
    );

    // Start server
    let addr = config.server_addr();
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Cannot bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,campaigns_server=debug,campaigns_api=debug,tower_http=debug".into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Build the campaign store from the configured file or the embedded dataset
fn load_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn CampaignRepository>> {
    let repository = match &config.catalog.data_path {
        Some(path) => InMemoryCampaignRepository::from_path(path)
            .with_context(|| format!("Cannot load campaigns from {}", path.display()))?,
        None => {
            info!("No CAMPAIGNS_DATA_PATH set, using the embedded dataset");
            InMemoryCampaignRepository::seeded().context("Embedded campaign dataset is invalid")?
        }
    };

    Ok(Arc::new(repository))
}

/// Build the application router
fn build_router(state: AppState, checker: Arc<HealthChecker>) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::readiness))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(checker);

    Router::new()
        .merge(health_routes)
        .merge(campaigns_api::app(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = AppConfig::default();
        let repository = load_repository(&config).unwrap();
        build_router(
            AppState::new(repository.clone(), config.limits),
            Arc::new(HealthChecker::new(repository)),
        )
    }

    async fn send_get(uri: &str) -> axum::response::Response {
        test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        assert_eq!(send_get("/health").await.status(), StatusCode::OK);
        assert_eq!(send_get("/health/live").await.status(), StatusCode::OK);
        assert_eq!(send_get("/health/ready").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_root() {
        assert_eq!(send_get("/").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_campaign_listing_is_mounted() {
        assert_eq!(send_get("/api/v1/campaign").await.status(), StatusCode::OK);
        assert_eq!(
            send_get("/api/v1/campaign?sort=hottest").await.status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/campaign")
                    .header(header::ORIGIN, "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[test]
    fn test_missing_data_file_fails_startup() {
        let mut config = AppConfig::default();
        config.catalog.data_path = Some("/nonexistent/campaigns.json".into());
        assert!(load_repository(&config).is_err());
    }
}
