//! In-memory transport for tests
//!
//! Records every subscribe/unsubscribe in order and lets a test push raw
//! payloads to whichever listener is currently bound. Failure modes can be
//! switched on to exercise the worker's error paths.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::config::SubscriptionConfig;
use crate::error::TransportError;
use crate::transport::{EventListener, LiveSubscription, Transport};

/// One call observed by [`RecordingTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCall {
    Subscribe(String),
    Unsubscribe(String),
}

#[derive(Default)]
struct Shared {
    calls: Mutex<Vec<TransportCall>>,
    bound: Mutex<Vec<(String, Arc<dyn EventListener>)>>,
    fail_subscribe: AtomicBool,
    fail_unsubscribe: AtomicBool,
    panic_subscribe: AtomicBool,
}

/// Transport that records calls instead of touching the network
#[derive(Clone, Default)]
pub struct RecordingTransport {
    shared: Arc<Shared>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `subscribe` calls fail
    pub fn fail_subscribe(&self, fail: bool) {
        self.shared.fail_subscribe.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent `unsubscribe` calls fail
    pub fn fail_unsubscribe(&self, fail: bool) {
        self.shared.fail_unsubscribe.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent `subscribe` calls panic, killing the worker thread
    pub fn panic_subscribe(&self, panic: bool) {
        self.shared.panic_subscribe.store(panic, Ordering::SeqCst);
    }

    /// Every call so far, in order
    pub fn calls(&self) -> Vec<TransportCall> {
        self.shared.calls.lock().clone()
    }

    /// Credentials with a currently bound listener
    pub fn bound_credentials(&self) -> Vec<String> {
        self.shared
            .bound
            .lock()
            .iter()
            .map(|(credential, _)| credential.clone())
            .collect()
    }

    /// Deliver a payload to the listener bound for `credential`
    ///
    /// Returns `false` when nothing is bound for that credential.
    pub fn emit(&self, credential: &str, payload: &Value) -> bool {
        let listener = self
            .shared
            .bound
            .lock()
            .iter()
            .find(|(bound, _)| bound == credential)
            .map(|(_, listener)| Arc::clone(listener));

        match listener {
            Some(listener) => {
                listener.on_event(payload);
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn subscribe(
        &self,
        credential: &str,
        config: &SubscriptionConfig,
        listener: Arc<dyn EventListener>,
    ) -> Result<Box<dyn LiveSubscription>, TransportError> {
        self.shared
            .calls
            .lock()
            .push(TransportCall::Subscribe(credential.to_string()));

        if self.shared.panic_subscribe.load(Ordering::SeqCst) {
            panic!("simulated transport panic for {}", credential);
        }

        if self.shared.fail_subscribe.load(Ordering::SeqCst) {
            return Err(TransportError::Subscribe {
                credential: credential.to_string(),
                channel: config.channel.clone(),
                message: "simulated failure".to_string(),
            });
        }

        self.shared
            .bound
            .lock()
            .push((credential.to_string(), listener));

        Ok(Box::new(RecordingSubscription {
            credential: credential.to_string(),
            shared: Arc::clone(&self.shared),
        }))
    }
}

struct RecordingSubscription {
    credential: String,
    shared: Arc<Shared>,
}

#[async_trait]
impl LiveSubscription for RecordingSubscription {
    fn credential(&self) -> &str {
        &self.credential
    }

    async fn unsubscribe(self: Box<Self>) -> Result<(), TransportError> {
        self.shared
            .calls
            .lock()
            .push(TransportCall::Unsubscribe(self.credential.clone()));
        self.shared
            .bound
            .lock()
            .retain(|(credential, _)| credential != &self.credential);

        if self.shared.fail_unsubscribe.load(Ordering::SeqCst) {
            return Err(TransportError::Unsubscribe {
                credential: self.credential.clone(),
                message: "simulated failure".to_string(),
            });
        }
        Ok(())
    }
}
