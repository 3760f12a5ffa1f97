//! Query client binding the character source to the query caches.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::instrument;

use charcat_cache::{QueryCache, QueryKey, QueryPolicy, QueryState};
use charcat_core::config::query::QueryConfig;
use charcat_core::result::AppResult;
use charcat_entity::{Character, PageEnvelope};
use charcat_gateway::CharacterSource;

/// Cached, de-duplicated access to a [`CharacterSource`].
#[derive(Debug)]
pub struct QueryClient<S: CharacterSource> {
    /// The remote source.
    source: Arc<S>,
    /// Page list queries.
    lists: QueryCache<Arc<PageEnvelope>>,
    /// Single character queries.
    details: QueryCache<Arc<Character>>,
}

impl<S: CharacterSource> QueryClient<S> {
    /// Create a client. Page lists always use [`QueryPolicy::no_retry`];
    /// character lookups use the configured detail policy.
    pub fn new(source: Arc<S>, config: &QueryConfig) -> Self {
        Self {
            source,
            lists: QueryCache::new("list", QueryPolicy::no_retry(), config.max_capacity),
            details: QueryCache::new(
                "detail",
                QueryPolicy::from(&config.detail),
                config.max_capacity,
            ),
        }
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        self.source.as_ref()
    }

    /// Fetch one page of characters.
    #[instrument(skip(self))]
    pub async fn list_page(&self, page: u32) -> AppResult<Arc<PageEnvelope>> {
        let source = &self.source;
        self.lists
            .fetch(QueryKey::list(page), || async move {
                source.list_characters(page).await.map(Arc::new)
            })
            .await
    }

    /// Fetch one character.
    #[instrument(skip(self))]
    pub async fn character(&self, id: &str) -> AppResult<Arc<Character>> {
        let source = &self.source;
        self.details
            .fetch(QueryKey::detail(id), || async move {
                source.character_by_id(id).await.map(Arc::new)
            })
            .await
    }

    /// Current state of a page query.
    pub fn list_state(&self, page: u32) -> QueryState<Arc<PageEnvelope>> {
        self.lists.state(&QueryKey::list(page))
    }

    /// Current state of a character query.
    pub fn detail_state(&self, id: &str) -> QueryState<Arc<Character>> {
        self.details.state(&QueryKey::detail(id))
    }

    /// Watch a character query.
    pub fn subscribe_detail(&self, id: &str) -> watch::Receiver<QueryState<Arc<Character>>> {
        self.details.subscribe(&QueryKey::detail(id))
    }
}
