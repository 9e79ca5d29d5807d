//! HTTP Server
//!
//! This module implements the Prometheus exporter HTTP server.
//!
//! # Architecture
//!
//! - **HTTP Server**: Axum-based server exposing `/metrics`, `/health`, and `/` endpoints
//! - **Scrape-driven collection**: there is no background loop; every `/metrics` request
//!   runs one collection cycle against the controller and renders its result
//! - **State Management**: the shared HTTP client and metrics settings, behind `Arc`
//!
//! # Endpoints
//!
//! - `GET /` - HTML landing page with links to metrics and health
//! - `GET /metrics` - Prometheus metrics in text format
//! - `GET /health` - Liveness check of the exporter process itself
//!
//! # Error Handling
//!
//! Any error during a cycle fails the whole scrape: the response is HTTP 500 with the error
//! text and contains no metric families.

use crate::config::{Config, MetricsConfig};
use crate::cycle;
use crate::error::{ExporterError, Result};
use crate::metrics;
use crate::smartzone::SmartZoneClient;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    client: Arc<SmartZoneClient>,
    metrics: Arc<MetricsConfig>,
}

impl AppState {
    pub fn new(client: SmartZoneClient, metrics: MetricsConfig) -> Self {
        Self {
            client: Arc::new(client),
            metrics: Arc::new(metrics),
        }
    }
}

/// Build the exporter's routes for the given configuration
pub fn build_router(config: &Config) -> Result<Router> {
    let client = SmartZoneClient::new(config.smartzone.clone())?;
    Ok(router(AppState::new(client, config.metrics.clone())))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

pub async fn start(config: Config) -> anyhow::Result<()> {
    let app = build_router(&config)?;

    let addr = format!("{}:{}", config.server.addr, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ExporterError::Server(format!("failed to bind {}: {}", addr, e)))?;

    info!("Metrics server listening on {}", addr);
    info!("Metrics available at http://{}/metrics", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| ExporterError::Server(e.to_string()))?;

    Ok(())
}

async fn root_handler() -> impl IntoResponse {
    axum::response::Html(
        r#"<html>
<head><title>SmartZone Exporter</title></head>
<body>
<h1>SmartZone Prometheus Exporter</h1>
<p><a href="/metrics">Metrics</a></p>
<p><a href="/health">Health</a></p>
</body>
</html>"#,
    )
}

async fn metrics_handler(State(state): State<AppState>) -> Response {
    let families = match cycle::collect(&state.client, &state.metrics).await {
        Ok(families) => families,
        Err(e) => {
            error!("Scrape failed: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Scrape failed: {}", e),
            )
                .into_response();
        }
    };

    match metrics::render(&families) {
        Ok(body) => ([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], body).into_response(),
        Err(e) => {
            error!("Failed to render metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error rendering metrics: {}", e),
            )
                .into_response()
        }
    }
}

async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
