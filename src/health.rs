//! `GET /health` endpoint handler.
//!
//! Returns a [`HealthResponse`] JSON payload containing the server
//! version, uptime, catalog source metadata and entry counts, and
//! cumulative upload statistics.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::server::AppState;

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub catalog: CatalogHealth,
    pub stats: StatsResponse,
}

#[derive(Serialize, Deserialize)]
pub struct CatalogHealth {
    pub source: String,
    pub queue_managers: usize,
    pub kafka_clusters: usize,
}

#[derive(Serialize, Deserialize)]
pub struct StatsResponse {
    pub uploads_accepted: u64,
    pub uploads_rejected: u64,
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let queue_managers = state.catalog.queue_managers().await.len();
    let kafka_clusters = state.catalog.kafka_clusters().await.len();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        catalog: CatalogHealth {
            source: state.catalog.name().to_string(),
            queue_managers,
            kafka_clusters,
        },
        stats: StatsResponse {
            uploads_accepted: state.stats.accepted.load(Ordering::Relaxed),
            uploads_rejected: state.stats.rejected.load(Ordering::Relaxed),
        },
    })
}
