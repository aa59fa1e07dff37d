use serde_json::Value;
use thiserror::Error;

/// Top-level error type for the MAX API client.
#[derive(Debug, Error)]
pub enum MaxError {
    /// Bad caller input, caught before any network call is made.
    #[error("validation error: {0}")]
    Validation(String),

    /// Network-level failure (DNS, TLS, timeout, connection reset).
    /// No response was obtained from the server.
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body is not valid JSON, or a required field was
    /// missing while mapping an entity.
    #[error("decode error: {0}")]
    Decode(String),

    /// The server answered with HTTP status >= 400.
    #[error("api error {status}: {message}")]
    Api {
        /// Error text from the body's `error` or `message` field.
        message: String,
        /// HTTP status code.
        status: u16,
        /// Full decoded error body for programmatic inspection.
        context: Value,
    },
}

impl MaxError {
    /// Full decoded body of an API error, if this is one.
    pub fn api_context(&self) -> Option<&Value> {
        match self {
            Self::Api { context, .. } => Some(context),
            _ => None,
        }
    }
}
