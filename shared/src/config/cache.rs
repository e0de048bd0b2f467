//! Logged-out token cache configuration

use serde::{Deserialize, Serialize};

/// Configuration for the in-memory logged-out token cache
///
/// The cache holds one entry per revoked access token until the token's own
/// claimed expiry, so the only tunable is the entry-count bound that protects
/// the process against logout storms.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RevocationCacheConfig {
    /// Maximum number of revoked tokens held at once
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for RevocationCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}

impl RevocationCacheConfig {
    /// Create a new configuration with an explicit bound
    pub fn new(max_entries: usize) -> Self {
        Self { max_entries }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let max_entries = std::env::var("LOGOUT_TOKEN_CACHE_MAX_SIZE")
            .unwrap_or_else(|_| default_max_entries().to_string())
            .parse()
            .unwrap_or_else(|_| default_max_entries());

        Self { max_entries }
    }
}

fn default_max_entries() -> usize {
    1000
}
