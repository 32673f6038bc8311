//! Uplink is a queue/Kafka upload testbed service.
//!
//! It exposes four read endpoints that list the known queue managers,
//! queues, Kafka clusters, and topics, plus a single `POST /api/upload`
//! endpoint that validates submitted content (an uploaded file or pasted
//! text, never both), normalizes its line endings, parses optional
//! message headers, and echoes everything back in a confirmation.
//! Nothing is forwarded to a real broker and nothing persists.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Subcommand dispatch and execution (run, health).
//! - [`catalog`] -- The four list providers behind the
//!   [`Catalog`](catalog::Catalog) trait.
//! - [`error`] -- Unified error types using `thiserror`.
//! - [`health`] -- `GET /health` endpoint handler returning runtime diagnostics.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//! - [`server`] -- Axum server setup, shared application state, and
//!   graceful shutdown.
//! - [`upload`] -- The upload validation pipeline: multipart extraction,
//!   content checks, newline normalization, and header parsing.

// Binary crate — public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod cli;
pub mod cmd;
pub mod error;
pub mod health;
pub mod logging;
pub mod server;
pub mod upload;
