//! # Play Subscription
//!
//! A sync-first facade that keeps exactly one jukebox channel subscription
//! alive for a mutable credential.
//!
//! ## Overview
//!
//! Hosts call [`SubscriptionManager::ensure`] with the current credential
//! and [`SubscriptionManager::shutdown`] when they are done. The actual
//! subscribe/unsubscribe calls are dispatched to a background worker with
//! its own tokio runtime, so callers never block on the network.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use play_subscription::{SubscriptionConfig, SubscriptionManager};
//!
//! let manager = SubscriptionManager::new(
//!     Arc::new(my_transport),
//!     Arc::new(my_listener),
//!     SubscriptionConfig::default(),
//! )?;
//!
//! manager.ensure("application-key")?;
//! // ... events arrive on my_listener ...
//! manager.shutdown()?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ensure/shutdown ──► command channel ──► worker thread (current-thread runtime)
//!                                             │
//!                                             └── Transport::subscribe / LiveSubscription::unsubscribe
//! ```
//!
//! Commands are handled strictly in order, which is what guarantees that a
//! credential change tears the old subscription down before the new one is
//! established.

pub mod config;
pub mod error;
pub mod manager;
pub mod transport;
pub mod worker;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

// Re-export main types for convenience
pub use config::SubscriptionConfig;
pub use error::{Result, SubscriptionError, TransportError};
pub use manager::{EnsureOutcome, SubscriptionManager};
pub use transport::{EventListener, LiveSubscription, Transport};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        EnsureOutcome, EventListener, LiveSubscription, Result, SubscriptionConfig,
        SubscriptionError, SubscriptionManager, Transport, TransportError,
    };
}
