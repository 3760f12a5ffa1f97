//! Pagination cursor for the accumulating list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// First page of every accumulation session.
pub const FIRST_PAGE: u32 = 1;

/// The page number currently being requested (1-based).
///
/// A cursor only moves forward one page at a time; going back to
/// [`FIRST_PAGE`] starts a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageCursor(u32);

impl PageCursor {
    /// A cursor on the first page.
    pub fn first() -> Self {
        Self(FIRST_PAGE)
    }

    /// The page number.
    pub fn page(&self) -> u32 {
        self.0
    }

    /// Whether this cursor is on the first page.
    pub fn is_first(&self) -> bool {
        self.0 == FIRST_PAGE
    }

    /// Move to the following page and return it.
    pub fn advance(&mut self) -> u32 {
        self.0 = self.0.saturating_add(1);
        self.0
    }

    /// Return to the first page.
    pub fn reset(&mut self) {
        self.0 = FIRST_PAGE;
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
