//! Page envelope returned by the character list endpoint.

use serde::{Deserialize, Serialize};

use crate::character::Character;

/// Pagination metadata attached to every list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of characters across all pages.
    pub count: u64,
    /// Total number of pages.
    pub pages: u32,
    /// URL of the following page, absent on the last page.
    pub next: Option<String>,
    /// URL of the preceding page, absent on the first page.
    pub prev: Option<String>,
}

impl PageInfo {
    /// Whether another page follows this one.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Whether a page precedes this one.
    pub fn has_previous(&self) -> bool {
        self.prev.is_some()
    }
}

/// One page of characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEnvelope {
    /// Pagination metadata.
    pub info: PageInfo,
    /// The characters on this page, in API order.
    pub results: Vec<Character>,
}

impl PageEnvelope {
    /// Split the envelope, handing over ownership of its characters.
    pub fn into_parts(self) -> (PageInfo, Vec<Character>) {
        (self.info, self.results)
    }
}
