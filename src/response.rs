//! Response classification.
//!
//! The single point where an HTTP-level result becomes a domain-level
//! success or [`MaxError::Api`]. Resource clients never branch on
//! status codes themselves.

use serde_json::Value;

use crate::error::MaxError;

/// Fallback when an error body carries neither `error` nor `message`.
const UNKNOWN_API_ERROR: &str = "Unknown API error";

/// Parse a raw response body and classify it.
///
/// Any body that is not valid JSON fails with [`MaxError::Decode`].
/// A status >= 400 fails with [`MaxError::Api`], taking the message
/// from the body's `error` field, then its `message` field, then a
/// fixed fallback; the full decoded body rides along as context.
/// Otherwise the decoded JSON value is returned unchanged.
pub fn classify(status: u16, raw_body: &str) -> Result<Value, MaxError> {
    let data: Value = serde_json::from_str(raw_body)
        .map_err(|e| MaxError::Decode(format!("invalid JSON response: {e}")))?;

    if status >= 400 {
        let message = data
            .get("error")
            .and_then(Value::as_str)
            .or_else(|| data.get("message").and_then(Value::as_str))
            .unwrap_or(UNKNOWN_API_ERROR)
            .to_string();
        return Err(MaxError::Api {
            message,
            status,
            context: data,
        });
    }

    Ok(data)
}
