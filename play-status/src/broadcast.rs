//! In-process broadcast of state updates
//!
//! Every accepted update is sent once under a fixed action name with the
//! update serialized as JSON, so listeners do not need to share types with
//! the core to consume it.

use tokio::sync::broadcast;

use crate::model::StateUpdate;

/// A state update as seen by broadcast listeners
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastMessage {
    /// Name identifying the kind of broadcast
    pub action: String,
    /// JSON-serialized [`StateUpdate`]
    pub payload: String,
}

impl BroadcastMessage {
    /// Decode the carried update
    pub fn update(&self) -> serde_json::Result<StateUpdate> {
        StateUpdate::from_json(&self.payload)
    }
}

/// Sender side of the update broadcast
///
/// Cloning shares the underlying channel.
#[derive(Debug, Clone)]
pub struct UpdateBroadcaster {
    action: String,
    tx: broadcast::Sender<BroadcastMessage>,
}

impl UpdateBroadcaster {
    pub fn new(action: impl Into<String>, capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity.max(1));
        Self {
            action: action.into(),
            tx,
        }
    }

    /// Register a new listener
    pub fn subscribe(&self) -> broadcast::Receiver<BroadcastMessage> {
        self.tx.subscribe()
    }

    /// Send `update` to every listener
    ///
    /// Returns the number of listeners reached. Having none is not an error.
    pub fn publish(&self, update: &StateUpdate) -> serde_json::Result<usize> {
        let message = BroadcastMessage {
            action: self.action.clone(),
            payload: update.to_json()?,
        };

        Ok(self.tx.send(message).unwrap_or(0))
    }
}
