//! Configuration for the status core
//!
//! Everything here is host-owned: the broadcast name other components
//! listen for, the icon, and the locale-specific text templates.

use play_subscription::SubscriptionConfig;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Broadcast name carried by every state update
pub const DEFAULT_BROADCAST_ACTION: &str = "play.action.STATUS_UPDATE";

/// Configuration for [`StatusCore`](crate::StatusCore)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Channel and event to bind
    pub subscription: SubscriptionConfig,

    /// Name identifying state update broadcasts
    /// Default: "play.action.STATUS_UPDATE"
    pub broadcast_action: String,

    /// Messages buffered per broadcast receiver before it starts lagging
    /// Default: 16
    pub broadcast_capacity: usize,

    /// Icon shown on the status indicator
    /// Default: "notification"
    pub indicator_icon: String,

    /// Ticker text; `{0}` is the track name, `{1}` the artist
    /// Default: "Now playing {0} by {1}"
    pub ticker_template: String,

    /// Indicator body; `{0}` is the artist, `{1}` the album
    /// Default: "{0} - {1}"
    pub content_template: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            subscription: SubscriptionConfig::default(),
            broadcast_action: DEFAULT_BROADCAST_ACTION.to_string(),
            broadcast_capacity: 16,
            indicator_icon: "notification".to_string(),
            ticker_template: "Now playing {0} by {1}".to_string(),
            content_template: "{0} - {1}".to_string(),
        }
    }
}

impl StatusConfig {
    /// Create a new StatusConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from JSON; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the subscription channel config
    pub fn with_subscription(mut self, subscription: SubscriptionConfig) -> Self {
        self.subscription = subscription;
        self
    }

    /// Set the broadcast name
    pub fn with_broadcast_action(mut self, action: impl Into<String>) -> Self {
        self.broadcast_action = action.into();
        self
    }

    /// Set the indicator icon
    pub fn with_indicator_icon(mut self, icon: impl Into<String>) -> Self {
        self.indicator_icon = icon.into();
        self
    }

    /// Set the ticker and body templates
    pub fn with_templates(
        mut self,
        ticker_template: impl Into<String>,
        content_template: impl Into<String>,
    ) -> Self {
        self.ticker_template = ticker_template.into();
        self.content_template = content_template.into();
        self
    }
}
