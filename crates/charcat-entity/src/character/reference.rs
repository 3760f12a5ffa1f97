//! Named link to another API resource.

use serde::{Deserialize, Serialize};

/// A denormalized reference such as a character's origin or location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Display name, e.g. `"Earth (C-137)"`.
    pub name: String,
    /// Lookup URL; empty when the API does not know the resource.
    #[serde(default)]
    pub url: String,
}

impl ResourceRef {
    /// Whether the API provided a lookup URL.
    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }
}
