//! Fan-out of accepted state updates
//!
//! Each update produces exactly one broadcast and one indicator refresh. The
//! broadcast is unconditional: an update identical to the previous one is
//! still sent.

use std::sync::Arc;

use crate::broadcast::UpdateBroadcaster;
use crate::config::StatusConfig;
use crate::indicator::{IndicatorAction, IndicatorHost, IndicatorTemplates, StatusIndicator};
use crate::model::StateUpdate;

/// Publishes updates to the broadcast sink and the status indicator
pub struct StateNotifier {
    broadcaster: UpdateBroadcaster,
    host: Arc<dyn IndicatorHost>,
    templates: IndicatorTemplates,
    icon: String,

    /// Created on the first update, dropped on dismiss
    indicator: Option<StatusIndicator>,
}

impl StateNotifier {
    pub fn new(config: &StatusConfig, host: Arc<dyn IndicatorHost>) -> Self {
        Self {
            broadcaster: UpdateBroadcaster::new(
                config.broadcast_action.clone(),
                config.broadcast_capacity,
            ),
            host,
            templates: IndicatorTemplates {
                ticker: config.ticker_template.clone(),
                content: config.content_template.clone(),
            },
            icon: config.indicator_icon.clone(),
            indicator: None,
        }
    }

    /// Broadcast `update` and bring the indicator in line with it
    pub fn notify(&mut self, update: &StateUpdate) {
        match self.broadcaster.publish(update) {
            Ok(reached) => tracing::debug!("Broadcast state update to {} listeners", reached),
            Err(e) => tracing::warn!("Failed to serialize state update for broadcast: {}", e),
        }

        self.refresh_indicator(update);
    }

    fn refresh_indicator(&mut self, update: &StateUpdate) {
        let playing = &update.playing;
        let ticker = self.templates.ticker_for(playing);
        let title = playing.name.clone();
        let body = self.templates.body_for(playing);

        match self.indicator.as_mut() {
            Some(indicator) => {
                indicator.ticker = ticker;
                indicator.title = title;
                indicator.body = body;
                self.host.update(indicator);
            }
            None => {
                let indicator = StatusIndicator {
                    icon: self.icon.clone(),
                    ongoing: true,
                    ticker,
                    title,
                    body,
                    action: IndicatorAction::OpenApp,
                };
                tracing::debug!("Showing status indicator");
                self.host.show(&indicator);
                self.indicator = Some(indicator);
            }
        }
    }

    /// Remove the indicator if it is showing
    ///
    /// The next [`notify`](Self::notify) creates a fresh one.
    pub fn dismiss(&mut self) {
        if self.indicator.take().is_some() {
            tracing::debug!("Removing status indicator");
            self.host.remove();
        }
    }

    /// Indicator as last shown to the host
    pub fn indicator(&self) -> Option<&StatusIndicator> {
        self.indicator.as_ref()
    }

    pub fn broadcaster(&self) -> &UpdateBroadcaster {
        &self.broadcaster
    }
}
