//! Integration tests for the four listing endpoints.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use uplink::catalog::StaticCatalog;
use uplink::server::{self, AppState, Stats};

async fn start_test_server() -> (SocketAddr, tokio::sync::oneshot::Sender<()>) {
    let state = Arc::new(AppState {
        catalog: Box::new(StaticCatalog),
        start_time: Instant::now(),
        stats: Stats::new(),
    });

    let router = server::build_router(state, 1_048_576);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    (addr, shutdown_tx)
}

async fn get_list(addr: SocketAddr, path: &str) -> Vec<String> {
    let url = format!("http://{addr}{path}");
    let resp = reqwest::get(&url).await.unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}

#[tokio::test]
async fn lists_queue_managers() {
    let (addr, shutdown) = start_test_server().await;

    let qms = get_list(addr, "/api/qms").await;
    assert_eq!(qms, ["QM1", "QM2", "QM3"]);

    let _ = shutdown.send(());
}

#[tokio::test]
async fn lists_queues_for_any_manager() {
    let (addr, shutdown) = start_test_server().await;

    let queues = get_list(addr, "/api/QM1/queues").await;
    assert_eq!(queues, ["Queue1", "Queue2", "Queue3"]);

    // Path segment is echoed into the lookup but the static catalog
    // serves the same queues for every manager.
    let other = get_list(addr, "/api/QM2/queues").await;
    assert_eq!(other, queues);

    let _ = shutdown.send(());
}

#[tokio::test]
async fn lists_kafka_clusters() {
    let (addr, shutdown) = start_test_server().await;

    let kcs = get_list(addr, "/api/kcs").await;
    assert_eq!(kcs, ["KC1", "KC2", "KC3"]);

    let _ = shutdown.send(());
}

#[tokio::test]
async fn lists_topics_for_cluster() {
    let (addr, shutdown) = start_test_server().await;

    let topics = get_list(addr, "/api/KC1/topics").await;
    assert_eq!(topics, ["Topic1", "Topic2", "Topic3"]);

    let _ = shutdown.send(());
}
