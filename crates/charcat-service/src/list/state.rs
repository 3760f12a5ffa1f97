//! List lifecycle states and render snapshots.

use std::fmt;

use charcat_entity::Character;

/// Where the list is in its session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    /// Nothing requested yet.
    Empty,
    /// A page is being fetched.
    Loading {
        /// The page in flight.
        page: u32,
    },
    /// The latest page merged.
    Populated {
        /// Whether the API announced another page.
        has_more: bool,
    },
    /// The latest page failed. Only a full reload leaves this state.
    Errored,
}

impl ListState {
    /// Whether the first page of a session is loading.
    pub fn is_initial_load(&self) -> bool {
        matches!(self, Self::Loading { page: 1 })
    }

    /// Whether every page has been merged.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Populated { has_more: false })
    }
}

impl fmt::Display for ListState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Loading { page } => write!(f, "loading page {page}"),
            Self::Populated { has_more: true } => write!(f, "populated (more available)"),
            Self::Populated { has_more: false } => write!(f, "populated (exhausted)"),
            Self::Errored => write!(f, "errored"),
        }
    }
}

/// Everything a list screen needs to draw itself.
#[derive(Debug, Clone)]
pub struct ListSnapshot<'a> {
    /// Lifecycle state.
    pub state: ListState,
    /// Characters matching the current search, in page order.
    pub items: Vec<&'a Character>,
    /// Number of characters accumulated so far.
    pub loaded: usize,
    /// Total number of characters announced by the API.
    pub total: Option<u64>,
    /// Inline error banner, unless dismissed.
    pub banner: Option<&'a str>,
    /// Current search text.
    pub search: &'a str,
}
