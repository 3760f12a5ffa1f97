//! Query cache configuration.

use serde::{Deserialize, Serialize};

/// Settings for the request-coalescing query cache.
///
/// Page lists never retry and never stay fresh, so only the detail
/// policy is configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Maximum number of entries held per query kind.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
    /// Policy for single character queries.
    #[serde(default = "QueryPolicyConfig::detail")]
    pub detail: QueryPolicyConfig,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
            detail: QueryPolicyConfig::detail(),
        }
    }
}

/// Retry and freshness settings for one query kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryPolicyConfig {
    /// Number of retries after the first failed attempt.
    #[serde(default)]
    pub retry: u32,
    /// Delay before the first retry in milliseconds; doubles per attempt.
    #[serde(default = "default_retry_delay")]
    pub retry_delay_ms: u64,
    /// Upper bound for the retry delay in milliseconds.
    #[serde(default = "default_max_retry_delay")]
    pub max_retry_delay_ms: u64,
    /// How long a successful result is served without refetching.
    #[serde(default)]
    pub stale_seconds: u64,
}

impl QueryPolicyConfig {
    /// Single characters: three retries with exponential backoff.
    pub fn detail() -> Self {
        Self {
            retry: 3,
            retry_delay_ms: default_retry_delay(),
            max_retry_delay_ms: default_max_retry_delay(),
            stale_seconds: 0,
        }
    }
}

fn default_max_capacity() -> u64 {
    1000
}

fn default_retry_delay() -> u64 {
    1000
}

fn default_max_retry_delay() -> u64 {
    30_000
}
