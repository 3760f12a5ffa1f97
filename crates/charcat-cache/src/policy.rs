//! Retry and freshness policy.

use std::time::Duration;

use charcat_core::config::query::QueryPolicyConfig;

/// How one kind of query retries and how long results stay fresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPolicy {
    /// Retries after the first failed attempt.
    pub retry: u32,
    /// Delay before the first retry.
    pub retry_delay: Duration,
    /// Upper bound for any retry delay.
    pub max_retry_delay: Duration,
    /// How long a success is served from cache. Zero means every new
    /// request refetches once the in-flight one completes.
    pub stale_time: Duration,
}

impl QueryPolicy {
    /// No retries, nothing kept fresh. Page lists always use this.
    pub fn no_retry() -> Self {
        Self {
            retry: 0,
            retry_delay: Duration::ZERO,
            max_retry_delay: Duration::ZERO,
            stale_time: Duration::ZERO,
        }
    }

    /// Delay before retry number `attempt` (0-based): doubles, capped.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.retry_delay
            .saturating_mul(factor)
            .min(self.max_retry_delay)
    }

    /// Whether results are dropped as soon as they are delivered.
    pub fn is_always_stale(&self) -> bool {
        self.stale_time.is_zero()
    }
}

impl From<&QueryPolicyConfig> for QueryPolicy {
    fn from(config: &QueryPolicyConfig) -> Self {
        Self {
            retry: config.retry,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
            max_retry_delay: Duration::from_millis(config.max_retry_delay_ms),
            stale_time: Duration::from_secs(config.stale_seconds),
        }
    }
}
