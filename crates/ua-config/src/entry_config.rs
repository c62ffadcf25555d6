use crate::{DEFAULT_AUTHENTICATED_PATH, DEFAULT_UNAUTHENTICATED_PATH};

use serde::Deserialize;

/// Landing paths for the dashboard shell
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EntryConfig {
    /// Where a signed-in user lands
    pub authenticated_path: String,
    /// Where an anonymous visitor is sent
    pub unauthenticated_path: String,
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            authenticated_path: String::from(DEFAULT_AUTHENTICATED_PATH),
            unauthenticated_path: String::from(DEFAULT_UNAUTHENTICATED_PATH),
        }
    }
}
