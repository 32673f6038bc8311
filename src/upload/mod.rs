//! `POST /api/upload` — the upload validation endpoint.
//!
//! [`upload_handler`] decodes the multipart form into an
//! [`UploadRequest`], runs it through the pure validation pipeline in
//! [`validate`], and maps the outcome to an HTTP response: 200 with a
//! confirmation body, or 400 with the first failing rule's message.
//! Submodules handle the pipeline itself ([`validate`]) and message
//! header parsing ([`headers`]).

pub mod headers;
pub mod validate;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::server::AppState;
use validate::{NewlineFormat, UploadRequest};

/// Why an upload was rejected. Every variant maps to HTTP 400; the
/// `Display` strings are the response bodies clients match on.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Please provide either a file or pasted content, not both.")]
    ConflictingInput,

    #[error("No content provided. Please provide a file or pasted content.")]
    MissingInput,

    #[error("File type not allowed. Please upload only text, JSON, or XML files.")]
    UnsupportedMimeType,

    #[error("File extension not allowed.")]
    UnsupportedExtension,

    #[error("Error reading file: {0}")]
    FileRead(String),

    #[error("Invalid headers format.")]
    InvalidHeaders,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Malformed multipart request: {0}")]
    Multipart(String),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

pub async fn upload_handler(
    State(state): State<Arc<AppState>>,
    req_headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    let correlation_id = req_headers
        .get("x-correlation-id")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| uuid::Uuid::new_v4().to_string(), String::from);

    let result = async {
        let request = read_multipart(multipart).await?;
        tracing::info!(
            correlation_id = %correlation_id,
            tab = %request.tab,
            primary = %request.primary,
            secondary = %request.secondary,
            has_file = request.file_bytes.is_some(),
            "upload received"
        );
        validate::validate_and_process(request)
    }
    .await;

    match result {
        Ok(outcome) => {
            state.stats.accepted.fetch_add(1, Ordering::Relaxed);
            tracing::info!(correlation_id = %correlation_id, "upload accepted");
            (StatusCode::OK, outcome.confirmation()).into_response()
        }
        Err(e) => {
            state.stats.rejected.fetch_add(1, Ordering::Relaxed);
            tracing::info!(correlation_id = %correlation_id, reason = %e, "upload rejected");
            e.into_response()
        }
    }
}

/// Decode the multipart form into an [`UploadRequest`].
///
/// Unknown fields are ignored; `tab`, `primary`, and `secondary` are
/// required; `newlineFormat` defaults to unix when absent.
async fn read_multipart(mut multipart: Multipart) -> Result<UploadRequest, UploadError> {
    let mut request = UploadRequest::default();
    let mut tab = None;
    let mut primary = None;
    let mut secondary = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Multipart(e.to_string()))?
    {
        let Some(name) = field.name().map(String::from) else {
            continue;
        };

        match name.as_str() {
            "file" => {
                request.file_name = field.file_name().map(String::from);
                request.file_mime_type = field.content_type().map(String::from);
                request.file_bytes = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| UploadError::Multipart(e.to_string()))?,
                );
            }
            "content" => request.pasted_content = Some(read_text(field).await?),
            "newlineFormat" => {
                request.newline_format = NewlineFormat::parse(&read_text(field).await?);
            }
            "tab" => tab = Some(read_text(field).await?),
            "primary" => primary = Some(read_text(field).await?),
            "secondary" => secondary = Some(read_text(field).await?),
            "headers" => request.headers_raw = Some(read_text(field).await?),
            _ => {}
        }
    }

    request.tab = tab.ok_or(UploadError::MissingField("tab"))?;
    request.primary = primary.ok_or(UploadError::MissingField("primary"))?;
    request.secondary = secondary.ok_or(UploadError::MissingField("secondary"))?;
    Ok(request)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, UploadError> {
    field
        .text()
        .await
        .map_err(|e| UploadError::Multipart(e.to_string()))
}
