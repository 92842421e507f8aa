use serde::{Deserialize, Serialize};

/// Connection settings for the catalog backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL up to and including `/api`, no trailing slash.
    pub base_url: String,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}
