//! Error types for play-status

use thiserror::Error;

/// Result type for play-status operations
pub type Result<T> = std::result::Result<T, StatusError>;

/// Errors that can occur while running the status core
#[derive(Error, Debug)]
pub enum StatusError {
    /// Error from the subscription manager
    #[error("Subscription error: {0}")]
    Subscription(#[from] play_subscription::SubscriptionError),

    /// Error encoding or decoding JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
