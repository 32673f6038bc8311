//! Message header parsing and rendering.
//!
//! The upload form may carry a `headers` field: a JSON object mapping
//! header names to values, e.g. `{"header1": "value1"}`. [`parse`]
//! decodes it into a [`MessageHeaders`] map and [`render`] produces the
//! `{key=value, ...}` form embedded in the confirmation message.

use std::collections::BTreeMap;

use serde_json::Value;

use super::UploadError;

/// Sorted so [`render`] output is deterministic.
pub type MessageHeaders = BTreeMap<String, String>;

/// Parse the raw `headers` form field.
///
/// Absent or blank input yields an empty map. Otherwise the input must
/// be a JSON object; string, number, and boolean values are coerced to
/// strings, anything else (null, nested objects, arrays, a non-object
/// top level, malformed JSON) is rejected.
pub fn parse(raw: Option<&str>) -> Result<MessageHeaders, UploadError> {
    let Some(raw) = raw else {
        return Ok(MessageHeaders::new());
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(MessageHeaders::new());
    }

    let value: Value = serde_json::from_str(raw).map_err(|_| UploadError::InvalidHeaders)?;
    let Value::Object(object) = value else {
        return Err(UploadError::InvalidHeaders);
    };

    object
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => {
                    return Err(UploadError::InvalidHeaders)
                }
            };
            Ok((key, value))
        })
        .collect()
}

/// Render headers as `{key1=value1, key2=value2}` in key order.
#[must_use]
pub fn render(headers: &MessageHeaders) -> String {
    use std::fmt::Write;

    let mut buf = String::from("{");
    for (i, (key, value)) in headers.iter().enumerate() {
        if i > 0 {
            buf.push_str(", ");
        }
        // write! to String is infallible (only fails on OOM which is unrecoverable)
        let _ = write!(buf, "{key}={value}");
    }
    buf.push('}');
    buf
}
