//! Unified error types for Uplink.
//!
//! [`UplinkError`] covers process-level failures (startup, the health
//! probe subcommand). Upload validation failures are a separate,
//! request-scoped taxonomy in [`upload::UploadError`](crate::upload::UploadError)
//! because they surface as HTTP 400 bodies rather than process errors.

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum UplinkError {
    #[error("Invalid address: {0}")]
    AddressParse(#[from] std::net::AddrParseError),

    #[error("Invalid URI: {source}")]
    UriParse {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("HTTP request failed: {source}")]
    HttpRequest {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Health check failed with status {0}")]
    HealthCheckFailed(hyper::StatusCode),
}
