//! Configuration for the channel a subscription binds to
//!
//! The jukebox publishes state changes on a named channel under a named
//! event. Both names are fixed by the server, so the defaults are what
//! almost every host wants.

use serde::{Deserialize, Serialize};

/// Channel the jukebox publishes now-playing updates on
pub const DEFAULT_CHANNEL: &str = "now_playing_updates";

/// Event name bound on [`DEFAULT_CHANNEL`]
pub const DEFAULT_EVENT: &str = "update_now_playing";

/// Names used when binding a subscription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionConfig {
    /// Channel to subscribe to
    /// Default: "now_playing_updates"
    pub channel: String,

    /// Event to bind on the channel
    /// Default: "update_now_playing"
    pub event: String,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL.to_string(),
            event: DEFAULT_EVENT.to_string(),
        }
    }
}

impl SubscriptionConfig {
    /// Create a new SubscriptionConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the channel name
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Set the event name
    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = event.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_server_names() {
        let config = SubscriptionConfig::default();
        assert_eq!(config.channel, "now_playing_updates");
        assert_eq!(config.event, "update_now_playing");
    }

    #[test]
    fn test_builders() {
        let config = SubscriptionConfig::new()
            .with_channel("staging_updates")
            .with_event("update");
        assert_eq!(config.channel, "staging_updates");
        assert_eq!(config.event, "update");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: SubscriptionConfig =
            serde_json::from_str(r#"{"channel":"other"}"#).unwrap();
        assert_eq!(config.channel, "other");
        assert_eq!(config.event, DEFAULT_EVENT);
    }
}
