//! reqwest-backed character source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use charcat_core::config::api::ApiConfig;
use charcat_core::error::AppError;
use charcat_core::result::AppResult;
use charcat_entity::{Character, PageEnvelope};

use super::classify::{decode_error, status_error, transport_error};
use crate::source::{CharacterSource, Resource};

/// Character source talking to the REST API.
#[derive(Debug, Clone)]
pub struct HttpCharacterSource {
    /// Shared connection pool.
    client: Client,
    /// API root, e.g. `https://rickandmortyapi.com/api`.
    base_url: Url,
}

impl HttpCharacterSource {
    /// Build a source from configuration.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| {
            AppError::configuration(format!("Invalid api.base_url '{}': {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::configuration(format!(
                "api.base_url '{}' cannot carry path segments",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// The configured API root.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/character?page={page}`
    pub fn list_url(&self, page: u32) -> Url {
        let mut url = self.character_endpoint(None);
        url.query_pairs_mut()
            .append_pair("page", &page.to_string());
        url
    }

    /// `{base}/character/{id}` with `id` encoded as one path segment.
    pub fn detail_url(&self, id: &str) -> Url {
        self.character_endpoint(Some(id))
    }

    fn character_endpoint(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("character");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, resource: Resource) -> AppResult<T> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                warn!(%url, error = %e, "Request to character API failed");
                transport_error(e, resource)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Character API returned an error status");
            return Err(status_error(status, resource));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(e, resource))?;
        debug!(%url, bytes = body.len(), "Character API response received");

        serde_json::from_slice(&body).map_err(|e| {
            warn!(%url, error = %e, "Character API returned an unreadable body");
            decode_error(e, resource)
        })
    }
}

#[async_trait]
impl CharacterSource for HttpCharacterSource {
    #[instrument(skip(self))]
    async fn list_characters(&self, page: u32) -> AppResult<PageEnvelope> {
        if page == 0 {
            return Err(AppError::validation("Page numbers start at 1"));
        }
        self.get_json(self.list_url(page), Resource::List).await
    }

    #[instrument(skip(self))]
    async fn character_by_id(&self, id: &str) -> AppResult<Character> {
        let id = id.trim();
        if id.is_empty() {
            return Err(AppError::validation("Character id must not be empty"));
        }
        self.get_json(self.detail_url(id), Resource::Detail).await
    }
}
