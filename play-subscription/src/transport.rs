//! Seam between the subscription manager and the publish/subscribe transport
//!
//! The manager never talks to the network itself. A host supplies a
//! [`Transport`] that knows how to connect, subscribe and bind; the manager
//! only decides *when* to subscribe and unsubscribe.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::SubscriptionConfig;
use crate::error::TransportError;

/// Receiver for inbound channel events
///
/// Invoked once per inbound message, on whatever thread the transport
/// delivers on. Implementations must not panic on malformed payloads.
pub trait EventListener: Send + Sync {
    /// Handle one raw event payload
    fn on_event(&self, payload: &Value);
}

/// A live binding to a remote channel for one credential
#[async_trait]
pub trait LiveSubscription: Send {
    /// Credential this subscription was established with
    fn credential(&self) -> &str;

    /// Release the binding and disconnect
    async fn unsubscribe(self: Box<Self>) -> Result<(), TransportError>;
}

/// Publish/subscribe transport
///
/// `subscribe` runs on the manager's background worker, never on the
/// caller of [`SubscriptionManager::ensure`](crate::SubscriptionManager::ensure).
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Connect with `credential`, subscribe to `config.channel` and bind
    /// `config.event` to `listener`
    async fn subscribe(
        &self,
        credential: &str,
        config: &SubscriptionConfig,
        listener: Arc<dyn EventListener>,
    ) -> Result<Box<dyn LiveSubscription>, TransportError>;
}
