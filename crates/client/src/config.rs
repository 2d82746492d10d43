//! Client configuration

use std::time::Duration;

/// Environment variable overriding the default API origin.
pub const BASE_URL_ENV: &str = "STOREFRONT_API_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:8002/api/v1";
const DEFAULT_USER_AGENT: &str = concat!("storefront-client/", env!("CARGO_PKG_VERSION"));

/// Transport-level configuration consumed by the client builder.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ApiConfig {
    /// Default configuration with the base URL taken from
    /// `STOREFRONT_API_URL` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }
        config
    }

    /// Base URL without a trailing slash, so paths can be appended verbatim.
    pub fn normalized_base_url(&self) -> String {
        self.base_url.trim_end_matches('/').to_string()
    }
}
