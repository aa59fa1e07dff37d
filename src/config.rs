//! Client configuration.
//!
//! Immutable after construction; a `Config` is cheap to clone and safe
//! to share read-only across concurrent callers.

/// Default API endpoint of the MAX platform.
pub const DEFAULT_BASE_URL: &str = "https://platform-api.max.ru";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the MAX API.
#[derive(Debug, Clone)]
pub struct Config {
    token: String,
    base_url: String,
    timeout_secs: u64,
    proxy: Option<String>,
    verify_tls: bool,
}

impl Config {
    /// Create a config with the given bot token and all defaults.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            proxy: None,
            verify_tls: true,
        }
    }

    /// Override the API base URL. A trailing slash is trimmed so path
    /// joining later adds exactly one separator.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url: String = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Override the request timeout (seconds).
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Route requests through the given proxy URL.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Toggle TLS certificate verification (on by default).
    pub fn with_verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new("secret-token");
        assert_eq!(config.token(), "secret-token");
        assert_eq!(config.base_url(), "https://platform-api.max.ru");
        assert_eq!(config.timeout_secs(), 30);
        assert!(config.proxy().is_none());
        assert!(config.verify_tls());
    }

    #[test]
    fn test_config_trims_trailing_slash_once() {
        let config = Config::new("t").with_base_url("https://example.com/api/");
        assert_eq!(config.base_url(), "https://example.com/api");
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::new("t")
            .with_timeout_secs(5)
            .with_proxy("http://127.0.0.1:8080")
            .with_verify_tls(false);
        assert_eq!(config.timeout_secs(), 5);
        assert_eq!(config.proxy(), Some("http://127.0.0.1:8080"));
        assert!(!config.verify_tls());
    }
}
