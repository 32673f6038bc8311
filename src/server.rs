//! Axum server setup, shared application state, and graceful shutdown.
//!
//! Contains [`AppState`] (the `Arc`-shared state holding the catalog,
//! upload stats, and uptime), [`build_router`] for constructing the
//! Axum router with middleware layers, and [`shutdown_signal`] for
//! SIGTERM / Ctrl+C handling.

use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use std::time::Instant;

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::catalog::{self, Catalog};
use crate::health::health_handler;
use crate::upload;

#[derive(Debug)]
pub struct Stats {
    pub accepted: AtomicU64,
    pub rejected: AtomicU64,
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl Stats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accepted: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
        }
    }
}

pub struct AppState {
    pub catalog: Box<dyn Catalog>,
    pub start_time: Instant,
    pub stats: Stats,
}

pub fn build_router(state: Arc<AppState>, max_body: usize) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/qms", get(catalog::queue_managers_handler))
        .route(
            "/api/{queue_manager}/queues",
            get(catalog::queues_handler),
        )
        .route("/api/kcs", get(catalog::kafka_clusters_handler))
        .route(
            "/api/{kafka_cluster}/topics",
            get(catalog::topics_handler),
        )
        .route("/api/upload", post(upload::upload_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(max_body)),
        )
        .with_state(state)
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C"),
        () = terminate => tracing::info!("received SIGTERM"),
    }
}
