//! Character entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::reference::ResourceRef;
use super::status::CharacterStatus;

/// One character record as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Unique character identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Life status.
    pub status: CharacterStatus,
    /// Species, e.g. `"Human"`.
    pub species: String,
    /// Sub-species or variant; often empty.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Gender as reported by the API.
    pub gender: String,
    /// Place of origin.
    pub origin: ResourceRef,
    /// Last known location.
    pub location: ResourceRef,
    /// Avatar image URL.
    pub image: String,
    /// Episode URLs in airing order.
    #[serde(default)]
    pub episode: Vec<String>,
    /// Canonical URL of this record.
    #[serde(default)]
    pub url: String,
    /// When the record was created upstream.
    pub created: DateTime<Utc>,
}

impl Character {
    /// Number of episodes the character appears in.
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }

    /// `"Alive · Human"` style summary.
    pub fn status_line(&self) -> String {
        format!("{} · {}", self.status, self.species)
    }

    /// Creation date formatted as `YYYY-MM-DD`.
    pub fn created_date(&self) -> String {
        self.created.format("%Y-%m-%d").to_string()
    }
}
