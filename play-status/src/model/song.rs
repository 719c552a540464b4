//! Song record type

use serde::{Deserialize, Serialize};

/// One track as reported by the jukebox
///
/// Every text field is present; the decoder substitutes an empty string
/// for anything the server left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecord {
    /// Server-side identifier, possibly empty
    pub id: String,
    /// Track title
    pub name: String,
    /// Artist name
    pub artist: String,
    /// Album name
    pub album: String,
    /// Whether the track is starred
    pub starred: bool,
}

impl SongRecord {
    /// Create a SongRecord from its parts
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        starred: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            artist: artist.into(),
            album: album.into(),
            starred,
        }
    }
}
