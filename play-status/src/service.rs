//! StatusCore - main entry point for play-status
//!
//! Ties the subscription manager, the decoder and the notifier together.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use play_status::{StatusConfig, StatusCore};
//!
//! let core = StatusCore::new(StatusConfig::default(), Arc::new(transport), Arc::new(host))?;
//! let mut updates = core.subscribe_updates();
//!
//! core.start("application-key")?;
//! while let Ok(message) = updates.recv().await {
//!     let update = message.update()?;
//!     println!("Now playing {}", update.playing.name);
//! }
//! core.stop()?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use play_subscription::{EnsureOutcome, EventListener, SubscriptionManager, Transport};
use serde_json::Value;
use tokio::sync::broadcast;

use crate::broadcast::BroadcastMessage;
use crate::config::StatusConfig;
use crate::decoder::decode_update;
use crate::error::Result;
use crate::indicator::{IndicatorHost, StatusIndicator};
use crate::model::StateUpdate;
use crate::notifier::StateNotifier;

/// Lifecycle phase of a [`StatusCore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorePhase {
    /// No credential, no subscription
    Idle,
    /// A subscription is live or being established
    Active,
}

struct CoreState {
    phase: CorePhase,
    last: Option<StateUpdate>,
    notifier: StateNotifier,
}

/// State shared with the transport, which calls in on its own threads
struct CoreShared {
    state: Mutex<CoreState>,
}

impl CoreShared {
    fn handle_event(&self, payload: &Value) -> bool {
        // Decode outside the lock; it touches no shared state
        let Some(update) = decode_update(payload) else {
            tracing::debug!("Discarding event without now_playing/songs");
            return false;
        };

        let mut state = self.state.lock();
        if state.phase == CorePhase::Idle {
            tracing::debug!("Ignoring event received while idle");
            return false;
        }

        tracing::debug!(
            "Now playing {:?} with {} queued",
            update.playing.name,
            update.queued.len()
        );

        state.notifier.notify(&update);
        state.last = Some(update);
        true
    }
}

impl EventListener for CoreShared {
    fn on_event(&self, payload: &Value) {
        self.handle_event(payload);
    }
}

/// Background status client for one jukebox
///
/// `start`/`stop` only queue work for the subscription worker and never
/// block on the transport.
pub struct StatusCore {
    shared: Arc<CoreShared>,
    subscriptions: SubscriptionManager,
}

impl StatusCore {
    /// Create an idle core
    pub fn new(
        config: StatusConfig,
        transport: Arc<dyn Transport>,
        host: Arc<dyn IndicatorHost>,
    ) -> Result<Self> {
        let shared = Arc::new(CoreShared {
            state: Mutex::new(CoreState {
                phase: CorePhase::Idle,
                last: None,
                notifier: StateNotifier::new(&config, host),
            }),
        });

        let listener: Arc<dyn EventListener> = shared.clone();
        let subscriptions =
            SubscriptionManager::new(transport, listener, config.subscription.clone())?;

        Ok(Self {
            shared,
            subscriptions,
        })
    }

    /// Subscribe with `credential`, migrating from any previous one
    ///
    /// Starting again with the active credential does nothing. An empty
    /// credential is ignored. The last known update survives a migration
    /// until the new subscription delivers its first event.
    pub fn start(&self, credential: &str) -> Result<EnsureOutcome> {
        let mut state = self.shared.state.lock();
        let outcome = self.subscriptions.ensure(credential)?;

        if outcome != EnsureOutcome::Ignored && state.phase == CorePhase::Idle {
            tracing::info!("Status core active");
            state.phase = CorePhase::Active;
        }

        Ok(outcome)
    }

    /// Tear down the subscription and remove the indicator
    ///
    /// Safe to call when already idle. The core ends up idle with the
    /// indicator removed even if the teardown could not be dispatched; that
    /// failure is still returned.
    pub fn stop(&self) -> Result<()> {
        let mut state = self.shared.state.lock();
        state.notifier.dismiss();
        state.last = None;

        if state.phase == CorePhase::Active {
            tracing::info!("Status core idle");
            state.phase = CorePhase::Idle;
        }

        self.subscriptions.shutdown()?;
        Ok(())
    }

    /// Feed one raw payload through the decoder and notifier
    ///
    /// Returns whether the payload was accepted as a state update. Payloads
    /// are ignored while idle.
    pub fn on_raw_event(&self, payload: &Value) -> bool {
        self.shared.handle_event(payload)
    }

    pub fn phase(&self) -> CorePhase {
        self.shared.state.lock().phase
    }

    /// Most recent accepted update
    pub fn last_update(&self) -> Option<StateUpdate> {
        self.shared.state.lock().last.clone()
    }

    /// Indicator as last shown to the host
    pub fn indicator(&self) -> Option<StatusIndicator> {
        self.shared.state.lock().notifier.indicator().cloned()
    }

    /// Listen for update broadcasts
    pub fn subscribe_updates(&self) -> broadcast::Receiver<BroadcastMessage> {
        self.shared.state.lock().notifier.broadcaster().subscribe()
    }

    pub fn active_credential(&self) -> Option<String> {
        self.subscriptions.active_credential()
    }

    /// Wait for queued subscription work to finish
    ///
    /// See [`SubscriptionManager::flush`].
    pub fn flush(&self, timeout: Duration) -> bool {
        self.subscriptions.flush(timeout)
    }
}

impl Drop for StatusCore {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            tracing::warn!("Failed to stop status core on drop: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use play_subscription::testing::RecordingTransport;
    use serde_json::json;

    struct NullHost;

    impl IndicatorHost for NullHost {
        fn show(&self, _indicator: &StatusIndicator) {}
        fn update(&self, _indicator: &StatusIndicator) {}
        fn remove(&self) {}
    }

    fn core() -> StatusCore {
        StatusCore::new(
            StatusConfig::default(),
            Arc::new(RecordingTransport::new()),
            Arc::new(NullHost),
        )
        .unwrap()
    }

    fn payload() -> Value {
        json!({"now_playing": {"id": "1", "name": "Song A"}, "songs": []})
    }

    #[test]
    fn test_new_core_is_idle() {
        let core = core();
        assert_eq!(core.phase(), CorePhase::Idle);
        assert!(core.last_update().is_none());
        assert!(core.indicator().is_none());
    }

    #[test]
    fn test_events_ignored_while_idle() {
        let core = core();
        assert!(!core.on_raw_event(&payload()));
        assert!(core.last_update().is_none());
    }

    #[test]
    fn test_start_then_event() {
        let core = core();
        assert_eq!(core.start("key-1").unwrap(), EnsureOutcome::Established);
        assert_eq!(core.phase(), CorePhase::Active);

        assert!(core.on_raw_event(&payload()));
        assert_eq!(core.last_update().unwrap().playing.name, "Song A");
    }

    #[test]
    fn test_empty_credential_stays_idle() {
        let core = core();
        assert_eq!(core.start("").unwrap(), EnsureOutcome::Ignored);
        assert_eq!(core.phase(), CorePhase::Idle);
    }

    #[test]
    fn test_stop_clears_state() {
        let core = core();
        core.start("key-1").unwrap();
        core.on_raw_event(&payload());

        core.stop().unwrap();
        assert_eq!(core.phase(), CorePhase::Idle);
        assert!(core.last_update().is_none());
        assert!(core.indicator().is_none());
        assert!(core.active_credential().is_none());
    }
}
