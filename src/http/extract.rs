//! # Body Field Extraction
//!
//! Helpers for pulling fields out of a raw JSON body. Missing, null,
//! and empty-string fields are treated alike, and a wrong-typed field
//! is a plain validation failure rather than a deserialization
//! rejection, so handlers control the exact status and message.

use serde_json::Value;
use uuid::Uuid;

/// A required string field: present, a string, and non-empty.
pub fn required_str<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

/// A required integer field. Fractional numbers do not qualify.
pub fn required_i64(body: &Value, key: &str) -> Option<i64> {
    body.get(key).and_then(Value::as_i64)
}

/// An optional string field; absent and non-string both read as `None`.
pub fn optional_str(body: &Value, key: &str) -> Option<String> {
    body.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Parse a path or query segment as a record id. An id that does not
/// parse cannot match any record, so callers treat it as not-found.
pub fn parse_record_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}
