//! Query keys.
//!
//! Every query is identified by the resource it reads and its
//! parameters. The `Display` form is what appears in logs.

use std::fmt;

/// Resource prefix shared by all character queries.
const RESOURCE: &str = "characters";

/// Composite key of a cached query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// One page of the character list.
    List {
        /// Page number (1-based).
        page: u32,
    },
    /// One character by id.
    Detail {
        /// Character id as given by the caller.
        id: String,
    },
}

impl QueryKey {
    /// Key for a list page.
    pub fn list(page: u32) -> Self {
        Self::List { page }
    }

    /// Key for a single character.
    pub fn detail(id: impl Into<String>) -> Self {
        Self::Detail { id: id.into() }
    }

    /// `"list"` or `"detail"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::List { .. } => "list",
            Self::Detail { .. } => "detail",
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List { page } => write!(f, "{RESOURCE}:page={page}"),
            Self::Detail { id } => write!(f, "{RESOURCE}:id={id}"),
        }
    }
}
