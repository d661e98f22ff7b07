//! Extraction of the human-readable part of a backend error body.
//!
//! The backend answers non-2xx responses with `{"detail": ...}` where `detail`
//! is either a plain string or, for request validation failures, a list of
//! objects each carrying a `msg`.

use serde_json::Value;

/// Picks `detail[0].msg` when present, otherwise `detail` when it is a string.
///
/// Returns `None` for bodies without a usable message so the caller can fall
/// back to its generic text.
pub fn message(body: &Value) -> Option<String> {
    let detail = body.get("detail")?;

    let first_msg = detail
        .as_array()
        .and_then(|items| items.first())
        .and_then(|item| item.get("msg"))
        .and_then(Value::as_str)
        .filter(|msg| !msg.is_empty());

    if let Some(msg) = first_msg {
        return Some(msg.to_string());
    }

    detail
        .as_str()
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
