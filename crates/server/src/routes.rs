//! HTTP routes.
//!
//! Every response is prepared ahead of time by [`Dashboard`]; handlers only
//! hand out reference-counted bytes.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::dashboard::Dashboard;

/// Build the application router around a finished dashboard.
pub fn router(dashboard: Arc<Dashboard>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/stats", get(stats))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(dashboard)
}

async fn index(State(dashboard): State<Arc<Dashboard>>) -> impl IntoResponse {
    Html(dashboard.page_bytes())
}

async fn stats(State(dashboard): State<Arc<Dashboard>>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], dashboard.stats_json())
}

async fn healthz() -> &'static str {
    "ok"
}

/// Serve the dashboard on `addr` until Ctrl-C.
pub async fn serve(dashboard: Arc<Dashboard>, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(dashboard).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", err);
        // Without a signal handler, keep serving forever
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
