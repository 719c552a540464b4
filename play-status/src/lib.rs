//! Play Status
//!
//! Tracks what a shared jukebox is playing and tells the rest of the host
//! about it.
//!
//! # Features
//!
//! - **Single subscription**: one live channel subscription per credential,
//!   migrated cleanly when the credential changes
//! - **Tolerant decoding**: malformed payloads are dropped, malformed fields
//!   fall back to defaults
//! - **Broadcast**: every accepted update is sent to in-process listeners as
//!   JSON under a fixed action name
//! - **Status indicator**: a persistent, ongoing indicator kept in sync with
//!   the playing track
//!
//! # Architecture
//!
//! ```text
//! Transport ──► EventListener ──► decoder ──► StateNotifier ──┬──► UpdateBroadcaster
//!    ▲                              │                         └──► IndicatorHost
//!    │                              └──► last known StateUpdate
//! SubscriptionManager (worker thread)
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use play_status::{StatusConfig, StatusCore};
//!
//! play_status::logging::init_logging_from_env()?;
//!
//! let core = StatusCore::new(StatusConfig::default(), Arc::new(transport), Arc::new(host))?;
//! core.start("application-key")?;
//!
//! if let Some(update) = core.last_update() {
//!     println!("{} by {}", update.playing.name, update.playing.artist);
//! }
//!
//! core.stop()?;
//! ```

pub mod broadcast;
pub mod config;
pub mod decoder;
pub mod error;
pub mod indicator;
pub mod logging;
pub mod model;
pub mod notifier;
pub mod service;

// Re-exports - Public API
pub use broadcast::{BroadcastMessage, UpdateBroadcaster};
pub use config::StatusConfig;
pub use decoder::decode_update;
pub use error::{Result, StatusError};
pub use indicator::{IndicatorAction, IndicatorHost, StatusIndicator};
pub use model::{SongRecord, StateUpdate};
pub use notifier::StateNotifier;
pub use service::{CorePhase, StatusCore};

pub use play_subscription::{EnsureOutcome, EventListener, SubscriptionConfig, Transport};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BroadcastMessage, CorePhase, EnsureOutcome, IndicatorHost, SongRecord, StateUpdate,
        StatusConfig, StatusCore, StatusIndicator, Transport,
    };
}
