//! Feed codec configuration.

use serde::{Deserialize, Serialize};

/// Identity and channel settings used when encoding outbound frames.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FeedConfig {
    /// Game plugin subscribed to. Default: "taixiuKCBPlugin".
    pub plugin: Option<String>,
    /// Agent id sent in the auth frame. Default: "1".
    pub agent_id: Option<String>,
    /// Access token sent in the auth frame. Default: empty.
    pub access_token: Option<String>,
    /// Seconds between heartbeat frames. Default: 25.
    pub heartbeat_secs: Option<u64>,
}

impl FeedConfig {
    pub fn effective_plugin(&self) -> &str {
        self.plugin.as_deref().unwrap_or("taixiuKCBPlugin")
    }

    pub fn effective_agent_id(&self) -> &str {
        self.agent_id.as_deref().unwrap_or("1")
    }

    pub fn effective_access_token(&self) -> &str {
        self.access_token.as_deref().unwrap_or("")
    }

    pub fn effective_heartbeat_secs(&self) -> u64 {
        self.heartbeat_secs.unwrap_or(25)
    }
}
