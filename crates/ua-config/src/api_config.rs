use crate::{DEFAULT_API_PREFIX, DEFAULT_BASE_URL};

use serde::Deserialize;

/// Configuration for the usage-analytics API surface
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend base URL (scheme + host + optional port)
    pub base_url: String,
    /// Route prefix the admin endpoints live under
    pub prefix: String,
    /// Serve canned fixture payloads instead of calling the backend
    pub mock_enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            prefix: String::from(DEFAULT_API_PREFIX),
            mock_enabled: false,
        }
    }
}

impl ApiConfig {
    /// Base of the usage endpoints: `{base_url}{prefix}/usage`.
    ///
    /// Trailing slashes on `base_url` and `prefix` are tolerated.
    pub fn usage_base(&self) -> String {
        format!(
            "{}{}/usage",
            self.base_url.trim_end_matches('/'),
            self.prefix.trim_end_matches('/')
        )
    }
}
