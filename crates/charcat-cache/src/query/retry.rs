//! Retry loop applied inside a single coalesced fetch.

use std::future::Future;

use tracing::{debug, info, warn};

use charcat_core::result::AppResult;

use crate::keys::QueryKey;
use crate::policy::QueryPolicy;

/// Run `fetcher` until it succeeds, fails with a final error, or the
/// policy's retries are used up.
pub(crate) async fn run<V, F, Fut>(policy: &QueryPolicy, key: &QueryKey, fetcher: F) -> AppResult<V>
where
    F: Fn() -> Fut,
    Fut: Future<Output = AppResult<V>>,
{
    let mut attempt = 0u32;
    loop {
        match fetcher().await {
            Ok(value) => {
                if attempt > 0 {
                    info!(query = %key, retries = attempt, "Query succeeded after retrying");
                }
                return Ok(value);
            }
            Err(err) if attempt < policy.retry && err.kind.is_retryable() => {
                let delay = policy.backoff(attempt);
                attempt += 1;
                warn!(
                    query = %key,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Query failed, retrying"
                );
                tokio::time::sleep(delay).await;
            }
            Err(err) => {
                debug!(query = %key, error = %err, "Query failed");
                return Err(err);
            }
        }
    }
}
