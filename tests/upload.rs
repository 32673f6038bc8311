//! Integration tests for `POST /api/upload` over real multipart HTTP.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use reqwest::multipart::{Form, Part};
use uplink::catalog::StaticCatalog;
use uplink::health::HealthResponse;
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

async fn post_upload(addr: SocketAddr, form: Form) -> (u16, String) {
    let url = format!("http://{addr}/api/upload");
    let resp = reqwest::Client::new()
        .post(&url)
        .multipart(form)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap();
    (status, body)
}

fn text_file(bytes: &'static [u8], name: &str, mime: &str) -> Part {
    Part::bytes(bytes)
        .file_name(name.to_string())
        .mime_str(mime)
        .unwrap()
}

#[tokio::test]
async fn valid_file_upload_succeeds() {
    let (addr, shutdown) = start_test_server().await;

    let form = Form::new()
        .part("file", text_file(b"File content", "test.txt", "text/plain"))
        .text("newlineFormat", "windows")
        .text("tab", "queue")
        .text("primary", "QM1")
        .text("secondary", "Queue1")
        .text("headers", r#"{"header1":"value1"}"#);

    let (status, body) = post_upload(addr, form).await;
    assert_eq!(status, 200);
    assert!(body.contains("Upload successful"));
    assert!(body.contains("File content"));
    assert!(body.contains("header1=value1"));

    let _ = shutdown.send(());
}

#[tokio::test]
async fn valid_pasted_content_succeeds() {
    let (addr, shutdown) = start_test_server().await;

    let form = Form::new()
        .text("content", "This is manual content")
        .text("newlineFormat", "unix")
        .text("tab", "kafka")
        .text("primary", "KC1")
        .text("secondary", "Topic1")
        .text("headers", r#"{"x":"y"}"#);

    let (status, body) = post_upload(addr, form).await;
    assert_eq!(status, 200);
    assert!(body.contains("Upload successful for kafka tab."));
    assert!(body.contains("This is manual content"));
    assert!(body.contains("x=y"));

    let _ = shutdown.send(());
}

#[tokio::test]
async fn both_file_and_content_rejected() {
    let (addr, shutdown) = start_test_server().await;

    let form = Form::new()
        .part("file", text_file(b"File content", "test.txt", "text/plain"))
        .text("content", "Manual content")
        .text("tab", "queue")
        .text("primary", "QM1")
        .text("secondary", "Queue1");

    let (status, body) = post_upload(addr, form).await;
    assert_eq!(status, 400);
    assert!(body.contains("not both"));

    let _ = shutdown.send(());
}

#[tokio::test]
async fn empty_content_rejected() {
    let (addr, shutdown) = start_test_server().await;

    let form = Form::new()
        .text("content", "")
        .text("tab", "kafka")
        .text("primary", "KC1")
        .text("secondary", "Topic1");

    let (status, body) = post_upload(addr, form).await;
    assert_eq!(status, 400);
    assert!(body.contains("No content provided"));

    let _ = shutdown.send(());
}

#[tokio::test]
async fn disallowed_mime_type_rejected() {
    let (addr, shutdown) = start_test_server().await;

    let form = Form::new()
        .part("file", text_file(b"Some content", "test.txt", "image/png"))
        .text("tab", "queue")
        .text("primary", "QM1")
        .text("secondary", "Queue1");

    let (status, body) = post_upload(addr, form).await;
    assert_eq!(status, 400);
    assert!(body.contains("File type not allowed"));

    let _ = shutdown.send(());
}

#[tokio::test]
async fn disallowed_extension_rejected() {
    let (addr, shutdown) = start_test_server().await;

    let form = Form::new()
        .part("file", text_file(b"Content", "test.png", "text/plain"))
        .text("tab", "queue")
        .text("primary", "QM1")
        .text("secondary", "Queue1");

    let (status, body) = post_upload(addr, form).await;
    assert_eq!(status, 400);
    assert!(body.contains("File extension not allowed"));

    let _ = shutdown.send(());
}

#[tokio::test]
async fn malformed_headers_rejected() {
    let (addr, shutdown) = start_test_server().await;

    let form = Form::new()
        .text("content", "Content")
        .text("tab", "queue")
        .text("primary", "QM1")
        .text("secondary", "Queue1")
        .text("headers", "not a json");

    let (status, body) = post_upload(addr, form).await;
    assert_eq!(status, 400);
    assert!(body.contains("Invalid headers format"));

    let _ = shutdown.send(());
}

#[tokio::test]
async fn missing_required_field_rejected() {
    let (addr, shutdown) = start_test_server().await;

    let form = Form::new()
        .text("content", "Content")
        .text("primary", "QM1")
        .text("secondary", "Queue1");

    let (status, body) = post_upload(addr, form).await;
    assert_eq!(status, 400);
    assert!(body.contains("Missing required field: tab"));

    let _ = shutdown.send(());
}

#[tokio::test]
async fn windows_newline_format_expands_line_feeds() {
    let (addr, shutdown) = start_test_server().await;

    let form = Form::new()
        .part("file", text_file(b"line1\nline2", "test.txt", "text/plain"))
        .text("newlineFormat", "windows")
        .text("tab", "queue")
        .text("primary", "QM1")
        .text("secondary", "Queue1");

    let (status, body) = post_upload(addr, form).await;
    assert_eq!(status, 200);
    assert!(body.contains("line1\r\nline2"));

    let _ = shutdown.send(());
}

#[tokio::test]
async fn upload_stats_count_accepted_and_rejected() {
    let (addr, shutdown) = start_test_server().await;

    let ok_form = Form::new()
        .text("content", "Content")
        .text("tab", "queue")
        .text("primary", "QM1")
        .text("secondary", "Queue1");
    let (status, _) = post_upload(addr, ok_form).await;
    assert_eq!(status, 200);

    let bad_form = Form::new()
        .text("content", "")
        .text("tab", "queue")
        .text("primary", "QM1")
        .text("secondary", "Queue1");
    let (status, _) = post_upload(addr, bad_form).await;
    assert_eq!(status, 400);

    let url = format!("http://{addr}/health");
    let health: HealthResponse = reqwest::get(&url).await.unwrap().json().await.unwrap();
    assert_eq!(health.stats.uploads_accepted, 1);
    assert_eq!(health.stats.uploads_rejected, 1);

    let _ = shutdown.send(());
}
