use thiserror::Error;

/// Errors that can occur in the subscription manager
#[derive(Error, Debug)]
pub enum SubscriptionError {
    /// The background worker thread could not be started
    #[error("Failed to spawn subscription worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    /// The background worker is gone and can no longer accept commands
    #[error("Subscription worker has disconnected")]
    WorkerDisconnected,
}

/// Errors reported by a [`Transport`](crate::transport::Transport) implementation
///
/// These never leave the worker: they are logged and dropped, since the
/// manager does not retry on its own.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Binding to the remote channel failed
    #[error("Failed to subscribe to channel {channel} with credential {credential}: {message}")]
    Subscribe {
        credential: String,
        channel: String,
        message: String,
    },

    /// Releasing the remote channel failed
    #[error("Failed to unsubscribe credential {credential}: {message}")]
    Unsubscribe { credential: String, message: String },

    /// Any other transport-level failure
    #[error("Transport error: {0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type for subscription manager operations
pub type Result<T> = std::result::Result<T, SubscriptionError>;
