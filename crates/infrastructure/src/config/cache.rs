//! Upstream response cache configuration.

use serde::{Deserialize, Serialize};

use super::default_true;

/// In-process cache for successful upstream bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether upstream responses are cached
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Maximum number of cached upstream URLs
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
}

const fn default_max_entries() -> u64 {
    1_000
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: default_max_entries(),
        }
    }
}
