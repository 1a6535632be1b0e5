//! Client configuration.

/// Environment variable naming the backend base URL.
const API_URL_VAR: &str = "STOCKLINE_API_URL";

/// Default base path when no URL is configured (same-origin deployment
/// behind a reverse proxy).
const DEFAULT_BASE_URL: &str = "/api";

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from `STOCKLINE_API_URL`, defaulting to `/api`.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
