//! Remote character API configuration.

use serde::{Deserialize, Serialize};

/// Where and how to reach the character API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL, without a trailing `/character` segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    "https://rickandmortyapi.com/api".to_string()
}

fn default_timeout() -> u64 {
    15
}

fn default_user_agent() -> String {
    concat!("charcat/", env!("CARGO_PKG_VERSION")).to_string()
}
