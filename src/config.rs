use serde::{Deserialize, Serialize};

/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "thankunext/1.0";

/// Configuration for a single scan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Address of the site's home page, protocol included
    pub target_url: String,

    /// Value of the `user-agent` header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Default value for user_agent
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl ScanConfig {
    /// Create a new configuration with default values
    pub fn new(target_url: &str) -> Self {
        Self {
            target_url: target_url.to_string(),
            user_agent: default_user_agent(),
        }
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
