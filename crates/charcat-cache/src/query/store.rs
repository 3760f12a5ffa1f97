//! In-memory query cache using the moka crate.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use moka::future::Cache;
use tokio::sync::watch;
use tracing::debug;

use charcat_core::error::AppError;
use charcat_core::result::AppResult;

use super::retry;
use crate::keys::QueryKey;
use crate::policy::QueryPolicy;
use crate::state::QueryState;

/// Query cache for one kind of result.
///
/// Concurrent [`fetch`](Self::fetch) calls for the same key share one
/// underlying fetch and all observe its outcome. Errors are never cached.
#[derive(Clone)]
pub struct QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Label used in logs, e.g. `"list"`.
    name: &'static str,
    /// Completed results still within their freshness window.
    cache: Cache<QueryKey, V>,
    /// Retry and freshness policy.
    policy: QueryPolicy,
    /// Latest state per key, observable through `watch` receivers.
    board: Arc<DashMap<QueryKey, watch::Sender<QueryState<V>>>>,
    /// Tracked keys beyond which idle, unwatched entries are pruned.
    board_capacity: usize,
}

impl<V> QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Create a cache with the given policy and capacity.
    pub fn new(name: &'static str, policy: QueryPolicy, max_capacity: u64) -> Self {
        let mut builder = Cache::builder().max_capacity(max_capacity);
        if !policy.is_always_stale() {
            builder = builder.time_to_live(policy.stale_time);
        }

        Self {
            name,
            cache: builder.build(),
            policy,
            board: Arc::new(DashMap::new()),
            board_capacity: usize::try_from(max_capacity).unwrap_or(usize::MAX),
        }
    }

    /// Run `fetcher` for `key`, unless a fresh result exists or another
    /// caller is already fetching the same key.
    pub async fn fetch<F, Fut>(&self, key: QueryKey, fetcher: F) -> AppResult<V>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = AppResult<V>>,
    {
        if let Some(hit) = self.cache.get(&key).await {
            debug!(cache = self.name, query = %key, "Serving fresh query result");
            self.publish(&key, QueryState::Success(hit.clone()));
            return Ok(hit);
        }

        self.publish(&key, QueryState::Pending);
        let outcome = self
            .cache
            .try_get_with(key.clone(), retry::run(&self.policy, &key, fetcher))
            .await;

        match outcome {
            Ok(value) => {
                if self.policy.is_always_stale() {
                    self.cache.invalidate(&key).await;
                }
                self.publish(&key, QueryState::Success(value.clone()));
                Ok(value)
            }
            Err(shared) => {
                let err = AppError::clone(&shared);
                self.publish(&key, QueryState::Error(err.clone()));
                Err(err)
            }
        }
    }

    /// Current state of `key`.
    pub fn state(&self, key: &QueryKey) -> QueryState<V> {
        self.board
            .get(key)
            .map(|sender| sender.borrow().clone())
            .unwrap_or_default()
    }

    /// Watch state changes of `key`.
    pub fn subscribe(&self, key: &QueryKey) -> watch::Receiver<QueryState<V>> {
        self.board
            .entry(key.clone())
            .or_insert_with(|| watch::channel(QueryState::Idle).0)
            .subscribe()
    }

    /// Drop any cached result for `key` so the next fetch goes upstream.
    pub async fn invalidate(&self, key: &QueryKey) {
        self.cache.invalidate(key).await;
    }

    /// Drop every cached result and reset all states to idle.
    pub fn clear(&self) {
        self.cache.invalidate_all();
        for entry in self.board.iter() {
            entry.value().send_replace(QueryState::Idle);
        }
    }

    fn publish(&self, key: &QueryKey, state: QueryState<V>) {
        self.board
            .entry(key.clone())
            .or_insert_with(|| watch::channel(QueryState::Idle).0)
            .send_replace(state);

        if self.board.len() > self.board_capacity {
            self.prune(key);
        }
    }

    /// Forget settled keys nobody watches, keeping `current`.
    fn prune(&self, current: &QueryKey) {
        let before = self.board.len();
        self.board.retain(|key, sender| {
            key == current || sender.receiver_count() > 0 || sender.borrow().is_pending()
        });
        debug!(
            cache = self.name,
            pruned = before.saturating_sub(self.board.len()),
            "Pruned query status board"
        );
    }
}

impl<V> fmt::Debug for QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCache")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .field("entries", &self.cache.entry_count())
            .field("tracked_keys", &self.board.len())
            .field("board_capacity", &self.board_capacity)
            .finish()
    }
}
