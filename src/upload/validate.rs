//! The upload validation pipeline.
//!
//! [`validate_and_process`] is a pure function over an [`UploadRequest`]:
//! it enforces the file/pasted-content exclusivity rules, checks the
//! MIME-type and extension allow-lists, decodes the file bytes, runs
//! newline normalization exactly once on the working content, parses the
//! optional header JSON, and produces an [`UploadOutcome`] or the first
//! failing rule's [`UploadError`]. No I/O, no logging, no state.

use bytes::Bytes;

use super::headers::{self, MessageHeaders};
use super::UploadError;

const ALLOWED_MIME_TYPES: [&str; 4] = [
    "text/plain",
    "application/json",
    "application/xml",
    "text/xml",
];

const ALLOWED_EXTENSIONS: [&str; 3] = [".txt", ".json", ".xml"];

/// Everything the multipart form carried, decoded but not yet validated.
#[derive(Debug, Default)]
pub struct UploadRequest {
    pub file_bytes: Option<Bytes>,
    pub file_name: Option<String>,
    pub file_mime_type: Option<String>,
    pub pasted_content: Option<String>,
    pub newline_format: NewlineFormat,
    pub tab: String,
    pub primary: String,
    pub secondary: String,
    pub headers_raw: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NewlineFormat {
    Windows,
    #[default]
    Unix,
}

impl NewlineFormat {
    /// Lenient parse: anything other than (case-insensitive) "windows"
    /// means Unix, including typos. Matches the original testbed.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("windows") {
            Self::Windows
        } else {
            Self::Unix
        }
    }
}

/// A fully validated upload: normalized content plus the echoed routing
/// metadata and parsed headers.
#[derive(Debug)]
pub struct UploadOutcome {
    pub tab: String,
    pub primary: String,
    pub secondary: String,
    pub content: String,
    pub headers: MessageHeaders,
}

impl UploadOutcome {
    /// The confirmation body returned on HTTP 200.
    #[must_use]
    pub fn confirmation(&self) -> String {
        format!(
            "Upload successful for {} tab.\nPrimary: {}\nSecondary: {}\nContent: {}\nHeaders: {}",
            self.tab,
            self.primary,
            self.secondary,
            self.content,
            headers::render(&self.headers),
        )
    }
}

pub fn validate_and_process(request: UploadRequest) -> Result<UploadOutcome, UploadError> {
    let has_file = request.file_bytes.as_ref().is_some_and(|b| !b.is_empty());
    let has_pasted = request
        .pasted_content
        .as_deref()
        .is_some_and(|c| !c.trim().is_empty());

    if has_file && has_pasted {
        return Err(UploadError::ConflictingInput);
    }
    if !has_file && !has_pasted {
        return Err(UploadError::MissingInput);
    }

    let content = if has_file {
        if !is_allowed_mime_type(request.file_mime_type.as_deref()) {
            return Err(UploadError::UnsupportedMimeType);
        }
        if !is_allowed_extension(request.file_name.as_deref()) {
            return Err(UploadError::UnsupportedExtension);
        }
        // has_file guarantees the bytes are present
        let bytes = request.file_bytes.unwrap_or_default();
        String::from_utf8(bytes.to_vec())
            .map_err(|e| UploadError::FileRead(e.utf8_error().to_string()))?
    } else {
        request.pasted_content.unwrap_or_default()
    };

    let content = normalize_newlines(&content, request.newline_format);
    let headers = headers::parse(request.headers_raw.as_deref())?;

    Ok(UploadOutcome {
        tab: request.tab,
        primary: request.primary,
        secondary: request.secondary,
        content,
        headers,
    })
}

fn is_allowed_mime_type(mime: Option<&str>) -> bool {
    mime.is_some_and(|m| {
        ALLOWED_MIME_TYPES
            .iter()
            .any(|allowed| m.eq_ignore_ascii_case(allowed))
    })
}

fn is_allowed_extension(file_name: Option<&str>) -> bool {
    file_name.is_some_and(|name| {
        let lower = name.to_lowercase();
        ALLOWED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
    })
}

/// Convert line endings to the requested format.
///
/// Always collapses `\r\n` to `\n` first so the Windows branch never
/// doubles carriage returns; normalizing already-normalized content is
/// a no-op for either target.
#[must_use]
pub fn normalize_newlines(content: &str, format: NewlineFormat) -> String {
    let unix = content.replace("\r\n", "\n");
    match format {
        NewlineFormat::Unix => unix,
        NewlineFormat::Windows => unix.replace('\n', "\r\n"),
    }
}
