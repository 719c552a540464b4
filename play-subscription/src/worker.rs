//! Background worker thread for subscription churn
//!
//! Spawns a thread with its own single-threaded tokio runtime that owns the
//! live subscription. Commands arrive over one channel and are handled one
//! at a time, so a teardown dispatched before an establishment always
//! completes first.

use std::io;
use std::sync::{mpsc as std_mpsc, Arc};
use std::thread::{self, JoinHandle};

use tokio::sync::mpsc;

use crate::config::SubscriptionConfig;
use crate::transport::{EventListener, LiveSubscription, Transport};

/// Commands sent from the sync SubscriptionManager to the background worker
#[derive(Debug)]
pub enum Command {
    /// Subscribe with a credential
    Establish { credential: String },
    /// Drop the subscription established with a credential
    Teardown { credential: String },
    /// Signal back once every earlier command has been handled
    Flush(std_mpsc::Sender<()>),
    /// Tear down whatever is live and stop the worker
    Shutdown,
}

/// Spawns the background subscription worker thread
///
/// The worker owns its own tokio runtime and manages:
/// - The single live subscription
/// - Establishment and teardown through the transport
pub fn spawn_subscription_worker(
    transport: Arc<dyn Transport>,
    listener: Arc<dyn EventListener>,
    config: SubscriptionConfig,
    command_rx: mpsc::UnboundedReceiver<Command>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("play-subscription-worker".to_string())
        .spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    tracing::error!("Failed to create tokio runtime for subscription worker: {}", e);
                    return;
                }
            };

            rt.block_on(async {
                let mut worker = SubscriptionWorker {
                    transport,
                    listener,
                    config,
                    live: None,
                };
                worker.run(command_rx).await;
            });
        })
}

struct SubscriptionWorker {
    transport: Arc<dyn Transport>,
    listener: Arc<dyn EventListener>,
    config: SubscriptionConfig,
    live: Option<Box<dyn LiveSubscription>>,
}

impl SubscriptionWorker {
    async fn run(&mut self, mut command_rx: mpsc::UnboundedReceiver<Command>) {
        tracing::info!("Subscription worker started");

        while let Some(cmd) = command_rx.recv().await {
            match cmd {
                Command::Establish { credential } => self.establish(credential).await,
                Command::Teardown { credential } => self.teardown(&credential).await,
                Command::Flush(done) => {
                    let _ = done.send(());
                }
                Command::Shutdown => {
                    tracing::info!("Subscription worker received shutdown command");
                    self.release_live().await;
                    break;
                }
            }
        }

        // Manager dropped without an explicit shutdown
        self.release_live().await;
        tracing::info!("Subscription worker shut down");
    }

    async fn establish(&mut self, credential: String) {
        // Never hold two live subscriptions
        if let Some(previous) = self.live.as_ref() {
            tracing::warn!(
                "Establishing {} while {} is still live, tearing it down first",
                credential,
                previous.credential()
            );
            self.release_live().await;
        }

        tracing::debug!(
            "Worker: subscribing to {}/{} with credential {}",
            self.config.channel,
            self.config.event,
            credential
        );

        match self
            .transport
            .subscribe(&credential, &self.config, Arc::clone(&self.listener))
            .await
        {
            Ok(subscription) => {
                tracing::debug!("Subscription established for credential {}", credential);
                self.live = Some(subscription);
            }
            Err(e) => {
                tracing::warn!("Failed to subscribe with credential {}: {}", credential, e);
            }
        }
    }

    async fn teardown(&mut self, credential: &str) {
        let matches = self
            .live
            .as_ref()
            .is_some_and(|live| live.credential() == credential);

        if matches {
            self.release_live().await;
        } else {
            // Establishment for this credential failed earlier
            tracing::debug!("No live subscription for credential {}", credential);
        }
    }

    async fn release_live(&mut self) {
        if let Some(subscription) = self.live.take() {
            let credential = subscription.credential().to_string();
            tracing::debug!("Worker: unsubscribing credential {}", credential);
            if let Err(e) = subscription.unsubscribe().await {
                tracing::warn!("Failed to tear down subscription for {}: {}", credential, e);
            }
        }
    }
}
