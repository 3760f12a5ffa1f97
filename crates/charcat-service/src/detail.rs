//! Single character resolution.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use charcat_cache::QueryState;
use charcat_entity::Character;
use charcat_gateway::CharacterSource;

use crate::query::QueryClient;

/// Resolves one character for a detail screen.
#[derive(Debug)]
pub struct DetailResolver<S: CharacterSource> {
    /// Shared query client.
    client: Arc<QueryClient<S>>,
}

impl<S: CharacterSource> Clone for DetailResolver<S> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<S: CharacterSource> DetailResolver<S> {
    /// Create a resolver over a shared client.
    pub fn new(client: Arc<QueryClient<S>>) -> Self {
        Self { client }
    }

    /// Fetch the character with `id`.
    ///
    /// A missing or blank id disables the query: nothing is fetched and
    /// the result is [`QueryState::Idle`].
    pub async fn resolve(&self, id: Option<&str>) -> QueryState<Arc<Character>> {
        let Some(id) = normalize(id) else {
            debug!("No character id, detail query disabled");
            return QueryState::Idle;
        };
        self.client.character(id).await.into()
    }

    /// Current state for `id` without fetching.
    pub fn status(&self, id: Option<&str>) -> QueryState<Arc<Character>> {
        match normalize(id) {
            Some(id) => self.client.detail_state(id),
            None => QueryState::Idle,
        }
    }

    /// Watch the query for `id`.
    pub fn subscribe(&self, id: &str) -> watch::Receiver<QueryState<Arc<Character>>> {
        self.client.subscribe_detail(id.trim())
    }
}

fn normalize(id: Option<&str>) -> Option<&str> {
    id.map(str::trim).filter(|id| !id.is_empty())
}
