//! The four list providers: queue managers, queues, Kafka clusters, topics.
//!
//! Defines the [`Catalog`] trait so the static testbed data can later be
//! swapped for real MQ directory / Kafka admin lookups without touching
//! the upload validator, plus [`StaticCatalog`] (the only implementation)
//! and the axum handlers for the four `GET /api/...` endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{Path, State};
use axum::Json;

use crate::server::AppState;

// async_trait is required here because Catalog is used as Box<dyn Catalog>
// and native async fn in traits (Rust 1.75+) does not support dyn dispatch.
#[async_trait]
pub trait Catalog: Send + Sync {
    fn name(&self) -> &'static str;
    async fn queue_managers(&self) -> Vec<String>;
    async fn queues(&self, queue_manager: &str) -> Vec<String>;
    async fn kafka_clusters(&self) -> Vec<String>;
    async fn topics(&self, kafka_cluster: &str) -> Vec<String>;
}

/// Fixed testbed data. Every queue manager owns the same queues and
/// every cluster the same topics; the path segment is accepted but not
/// consulted.
pub struct StaticCatalog;

#[async_trait]
impl Catalog for StaticCatalog {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn queue_managers(&self) -> Vec<String> {
        to_strings(&["QM1", "QM2", "QM3"])
    }

    async fn queues(&self, _queue_manager: &str) -> Vec<String> {
        to_strings(&["Queue1", "Queue2", "Queue3"])
    }

    async fn kafka_clusters(&self) -> Vec<String> {
        to_strings(&["KC1", "KC2", "KC3"])
    }

    async fn topics(&self, _kafka_cluster: &str) -> Vec<String> {
        to_strings(&["Topic1", "Topic2", "Topic3"])
    }
}

fn to_strings(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

pub async fn queue_managers_handler(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.catalog.queue_managers().await)
}

pub async fn queues_handler(
    State(state): State<Arc<AppState>>,
    Path(queue_manager): Path<String>,
) -> Json<Vec<String>> {
    Json(state.catalog.queues(&queue_manager).await)
}

pub async fn kafka_clusters_handler(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.catalog.kafka_clusters().await)
}

pub async fn topics_handler(
    State(state): State<Arc<AppState>>,
    Path(kafka_cluster): Path<String>,
) -> Json<Vec<String>> {
    Json(state.catalog.topics(&kafka_cluster).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_catalog_lists_queue_managers_in_order() {
        let catalog = StaticCatalog;
        assert_eq!(catalog.queue_managers().await, ["QM1", "QM2", "QM3"]);
    }

    #[tokio::test]
    async fn static_catalog_queues_ignore_manager_name() {
        let catalog = StaticCatalog;
        assert_eq!(
            catalog.queues("QM1").await,
            catalog.queues("nonexistent").await
        );
    }

    #[tokio::test]
    async fn static_catalog_lists_clusters_and_topics() {
        let catalog = StaticCatalog;
        assert_eq!(catalog.kafka_clusters().await, ["KC1", "KC2", "KC3"]);
        assert_eq!(
            catalog.topics("KC1").await,
            ["Topic1", "Topic2", "Topic3"]
        );
    }
}
