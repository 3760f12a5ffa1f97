//! Character source trait.

use async_trait::async_trait;

use charcat_core::result::AppResult;
use charcat_entity::{Character, PageEnvelope};

/// Which endpoint a request targeted; selects user-facing error wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// The paginated character list.
    List,
    /// A single character by id.
    Detail,
}

impl Resource {
    /// Message for a 404 answer.
    pub fn not_found_message(&self) -> &'static str {
        match self {
            Self::List => "No characters found",
            Self::Detail => "Character not found",
        }
    }

    /// Message for a 500 answer.
    pub fn server_message(&self) -> &'static str {
        "Server error. Please try again later"
    }

    /// Message for an unreachable API or any other failed status.
    pub fn failed_message(&self) -> &'static str {
        match self {
            Self::List => "Failed to fetch characters. Please check your internet connection",
            Self::Detail => "Failed to fetch character. Please check your internet connection",
        }
    }

    /// Message for a body that is not the expected JSON document.
    pub fn malformed_message(&self) -> &'static str {
        match self {
            Self::List => "Failed to read characters from the server response",
            Self::Detail => "Failed to read character from the server response",
        }
    }
}

/// Read-only access to characters.
///
/// Failures use [`charcat_core::ErrorKind::Network`], `NotFound`, `Server`
/// or `Fetch`. Implementations perform exactly one attempt per call.
#[async_trait]
pub trait CharacterSource: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch one page of characters. `page` starts at 1.
    async fn list_characters(&self, page: u32) -> AppResult<PageEnvelope>;

    /// Fetch a single character by its id.
    async fn character_by_id(&self, id: &str) -> AppResult<Character>;
}
