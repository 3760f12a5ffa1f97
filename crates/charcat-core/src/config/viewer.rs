//! Terminal viewer configuration.

use serde::{Deserialize, Serialize};

/// Settings for the interactive viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Route opened on start-up.
    #[serde(default = "default_initial_route")]
    pub initial_route: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            initial_route: default_initial_route(),
        }
    }
}

fn default_initial_route() -> String {
    "/".to_string()
}
