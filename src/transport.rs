//! HTTP transport seam.
//!
//! One request in, status plus raw body out. Everything above this
//! layer (classification, entity mapping) is transport-agnostic, and
//! tests swap in a mock behind the [`HttpTransport`] trait.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::MaxError;

/// Status code and raw body of one HTTP exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Issues a single HTTP request against the MAX API.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform one request. `query` pairs, when given, are
    /// URL-encoded onto the path for any method (GET in practice,
    /// plus `chat_id` on message DELETE); `json` is serialized as the
    /// body for POST/PATCH only and ignored for other methods.
    /// Fails with [`MaxError::Transport`] when no response is obtained.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        json: Option<&Value>,
    ) -> Result<RawResponse, MaxError>;
}

/// Production transport over `reqwest`.
#[derive(Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl ReqwestTransport {
    /// Build a client honoring the config's timeout, proxy, and TLS
    /// verification settings.
    pub fn new(config: &Config) -> Result<Self, MaxError> {
        let mut builder = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs()))
            .danger_accept_invalid_certs(!config.verify_tls());

        if let Some(proxy) = config.proxy() {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| MaxError::Transport(format!("invalid proxy url: {e}")))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| MaxError::Transport(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            token: config.token().to_string(),
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        json: Option<&Value>,
    ) -> Result<RawResponse, MaxError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        debug!("{method} {url}");

        let mut request = self
            .client
            .request(method.clone(), &url)
            // The MAX API expects the raw token, no "Bearer" prefix.
            .header("Authorization", &self.token)
            .header("Accept", "application/json");

        if !query.is_empty() {
            request = request.query(query);
        }

        if method == Method::POST || method == Method::PATCH {
            if let Some(body) = json {
                request = request.json(body);
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| MaxError::Transport(format!("{method} {url} failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| MaxError::Transport(format!("failed to read response body: {e}")))?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_builds_from_config() {
        let config = Config::new("t").with_timeout_secs(5);
        let transport = ReqwestTransport::new(&config).unwrap();
        assert_eq!(transport.base_url, "https://platform-api.max.ru");
        assert_eq!(transport.token, "t");
    }

    #[test]
    fn test_transport_rejects_bad_proxy() {
        let config = Config::new("t").with_proxy("not a url");
        let err = ReqwestTransport::new(&config).unwrap_err();
        assert!(matches!(err, MaxError::Transport(_)));
    }
}
