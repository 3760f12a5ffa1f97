//! Path routing for the catalog screens.

use std::fmt;

use tracing::debug;

use charcat_core::error::AppError;
use charcat_core::result::AppResult;

/// Path of the list screen.
pub const CHARACTERS_PATH: &str = "/characters";

/// A screen the viewer can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The infinite-scroll list.
    Characters,
    /// One character's detail page.
    Character {
        /// Id segment taken from the path.
        id: String,
    },
}

impl Route {
    /// Map a path to a route. `/` redirects to the list.
    ///
    /// Query strings and fragments are ignored; a trailing slash is
    /// tolerated.
    pub fn resolve(path: &str) -> AppResult<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default().trim();
        let trimmed = path.trim_end_matches('/');

        if trimmed.is_empty() {
            debug!(from = path, to = CHARACTERS_PATH, "Redirecting");
            return Ok(Self::Characters);
        }
        if trimmed == CHARACTERS_PATH {
            return Ok(Self::Characters);
        }
        if let Some(id) = trimmed.strip_prefix("/character/") {
            if !id.is_empty() && !id.contains('/') {
                return Ok(Self::Character { id: id.to_string() });
            }
        }
        Err(AppError::not_found(format!("No page at '{path}'")))
    }

    /// Route for one character.
    pub fn character(id: impl fmt::Display) -> Self {
        Self::Character { id: id.to_string() }
    }

    /// Canonical path of this route.
    pub fn path(&self) -> String {
        match self {
            Self::Characters => CHARACTERS_PATH.to_string(),
            Self::Character { id } => format!("/character/{id}"),
        }
    }

    /// Character id for detail routes.
    pub fn character_id(&self) -> Option<&str> {
        match self {
            Self::Characters => None,
            Self::Character { id } => Some(id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
