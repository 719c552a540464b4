//! Sync-first subscription manager
//!
//! Tracks the single active credential and dispatches subscription churn to
//! a background worker. No method waits on the transport.

use std::sync::{mpsc as std_mpsc, Arc};
use std::thread::JoinHandle;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::config::SubscriptionConfig;
use crate::error::{Result, SubscriptionError};
use crate::transport::{EventListener, Transport};
use crate::worker::{spawn_subscription_worker, Command};

/// What [`SubscriptionManager::ensure`] did with a credential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// Nothing was active; a subscription is being established
    Established,
    /// A different credential was active; it is being torn down and replaced
    Migrated,
    /// The credential is already the active one
    Unchanged,
    /// The credential was empty and has been ignored
    Ignored,
}

/// Owner of the one live subscription
///
/// # Example
///
/// ```rust,ignore
/// use play_subscription::{SubscriptionManager, SubscriptionConfig};
///
/// let manager = SubscriptionManager::new(transport, listener, SubscriptionConfig::default())?;
///
/// manager.ensure("app-key")?;   // subscribes
/// manager.ensure("app-key")?;   // no-op
/// manager.ensure("other-key")?; // tears down app-key, then subscribes other-key
/// manager.shutdown()?;
/// ```
pub struct SubscriptionManager {
    /// Send commands to background worker
    command_tx: mpsc::UnboundedSender<Command>,

    /// Credential of the subscription most recently dispatched
    active: Mutex<Option<String>>,

    /// Background worker handle (kept alive)
    _worker: JoinHandle<()>,
}

impl SubscriptionManager {
    /// Create a manager and start its background worker
    ///
    /// `listener` is bound to every subscription the manager establishes.
    pub fn new(
        transport: Arc<dyn Transport>,
        listener: Arc<dyn EventListener>,
        config: SubscriptionConfig,
    ) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let worker = spawn_subscription_worker(transport, listener, config, command_rx)
            .map_err(SubscriptionError::WorkerSpawn)?;

        Ok(Self {
            command_tx,
            active: Mutex::new(None),
            _worker: worker,
        })
    }

    /// Make `credential` the active subscription
    ///
    /// If another credential is active its teardown is dispatched before the
    /// new establishment. Both run later on the worker; this returns as soon
    /// as they are queued.
    pub fn ensure(&self, credential: &str) -> Result<EnsureOutcome> {
        if credential.is_empty() {
            tracing::debug!("Ignoring empty credential");
            return Ok(EnsureOutcome::Ignored);
        }

        let mut active = self.active.lock();

        let outcome = match active.as_deref() {
            Some(current) if current == credential => return Ok(EnsureOutcome::Unchanged),
            Some(current) => {
                tracing::debug!("Migrating subscription {} -> {}", current, credential);
                self.send(Command::Teardown {
                    credential: current.to_string(),
                })?;
                EnsureOutcome::Migrated
            }
            None => EnsureOutcome::Established,
        };

        self.send(Command::Establish {
            credential: credential.to_string(),
        })?;
        *active = Some(credential.to_string());

        Ok(outcome)
    }

    /// Tear down the active subscription, if any
    ///
    /// Returns whether there was something to tear down.
    pub fn shutdown(&self) -> Result<bool> {
        let mut active = self.active.lock();

        match active.take() {
            Some(credential) => {
                tracing::debug!("Shutting down subscription for {}", credential);
                self.send(Command::Teardown { credential })?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Credential of the active subscription
    pub fn active_credential(&self) -> Option<String> {
        self.active.lock().clone()
    }

    /// Check if a subscription is active
    pub fn is_active(&self) -> bool {
        self.active.lock().is_some()
    }

    /// Block until the worker has handled every command dispatched so far
    ///
    /// Returns `false` if the timeout expires or the worker is gone.
    pub fn flush(&self, timeout: Duration) -> bool {
        let (done_tx, done_rx) = std_mpsc::channel();
        if self.send(Command::Flush(done_tx)).is_err() {
            return false;
        }
        done_rx.recv_timeout(timeout).is_ok()
    }

    fn send(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| SubscriptionError::WorkerDisconnected)
    }
}

impl Drop for SubscriptionManager {
    fn drop(&mut self) {
        tracing::debug!(
            "SubscriptionManager dropping, active credential: {:?}",
            self.active.lock().as_deref()
        );

        let _ = self.command_tx.send(Command::Shutdown);
    }
}
