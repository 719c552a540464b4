//! Playback snapshot type

use serde::{Deserialize, Serialize};

use super::SongRecord;

/// What is playing now and what is queued after it
///
/// A snapshot: each new update replaces the previous one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateUpdate {
    /// The currently playing track
    pub playing: SongRecord,
    /// Upcoming tracks in server order
    pub queued: Vec<SongRecord>,
}

impl StateUpdate {
    pub fn new(playing: SongRecord, queued: Vec<SongRecord>) -> Self {
        Self { playing, queued }
    }

    /// Serialize to the JSON payload carried by broadcasts
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a broadcast payload back into an update
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }
}
