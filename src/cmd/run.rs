//! `uplink run` — start the testbed server.
//!
//! Wires up logging, builds the shared state with the static catalog,
//! and starts the Axum HTTP server with graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::catalog::StaticCatalog;
use crate::cli::RunArgs;
use crate::error::UplinkError;
use crate::logging;
use crate::server::{self, AppState, Stats};

pub async fn execute(args: RunArgs) -> Result<(), UplinkError> {
    let log_format = logging::resolve_format(args.pretty, args.json);
    logging::init(&args.log_level, log_format);

    let state = Arc::new(AppState {
        catalog: Box::new(StaticCatalog),
        start_time: Instant::now(),
        stats: Stats::new(),
    });

    let router = server::build_router(state, args.max_body);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        addr = %addr,
        max_body = args.max_body,
        "uplink started"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    tracing::info!("uplink stopped");
    Ok(())
}
