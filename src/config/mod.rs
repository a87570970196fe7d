//! Configuration module for the Agora client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote forum API
    pub api_base_url: String,
    /// Timeout applied to every request
    pub request_timeout: Duration,
    /// Page size used by the browsing views
    pub page_size: u32,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("AGORA_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());
        // Trailing slash would double up when joining route paths
        let api_base_url = api_base_url.trim_end_matches('/').to_string();

        let timeout_ms: u64 = env::var("AGORA_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "10000".to_string())
            .parse()
            .expect("Invalid AGORA_REQUEST_TIMEOUT_MS format");

        let page_size: u32 = env::var("AGORA_PAGE_SIZE")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .expect("Invalid AGORA_PAGE_SIZE format");

        let log_level = env::var("AGORA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            api_base_url,
            request_timeout: Duration::from_millis(timeout_ms),
            page_size,
            log_level,
        }
    }

    /// Configuration pointing at a given API base URL, defaults elsewhere.
    pub fn for_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            request_timeout: Duration::from_millis(10_000),
            page_size: 5,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("AGORA_API_BASE_URL");
        env::remove_var("AGORA_REQUEST_TIMEOUT_MS");
        env::remove_var("AGORA_PAGE_SIZE");
        env::remove_var("AGORA_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.request_timeout, Duration::from_millis(10_000));
        assert_eq!(config.page_size, 5);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let config = Config::for_base_url("http://127.0.0.1:9999/");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9999");
    }
}
