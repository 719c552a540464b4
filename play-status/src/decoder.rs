//! Event decoder - converts raw channel payloads into state updates
//!
//! Payloads come straight off the wire and are trusted for nothing. A
//! payload that lacks the `now_playing` object or the `songs` array is not a
//! state update and yields `None`; anything wrong inside a song record is
//! papered over with defaults.

use serde_json::{Map, Value};

use crate::model::{SongRecord, StateUpdate};

/// Key of the currently playing record
pub const NOW_PLAYING_KEY: &str = "now_playing";

/// Key of the queue array
pub const SONGS_KEY: &str = "songs";

/// Decode a raw event payload into a [`StateUpdate`]
///
/// Returns `None` when the payload does not carry both a `now_playing`
/// object and a `songs` array. Queue entries that are not objects are
/// skipped; the rest keep their order.
pub fn decode_update(payload: &Value) -> Option<StateUpdate> {
    let now_playing = payload.get(NOW_PLAYING_KEY)?.as_object()?;
    let songs = payload.get(SONGS_KEY)?.as_array()?;

    let playing = decode_song(now_playing);
    let queued = songs
        .iter()
        .filter_map(Value::as_object)
        .map(decode_song)
        .collect();

    Some(StateUpdate { playing, queued })
}

/// Decode one song record, substituting defaults field by field
pub fn decode_song(object: &Map<String, Value>) -> SongRecord {
    SongRecord {
        id: text_field(object, "id"),
        name: text_field(object, "name"),
        artist: text_field(object, "artist"),
        album: text_field(object, "album"),
        starred: matches!(object.get("starred"), Some(Value::Bool(true))),
    }
}

/// Scalars are rendered as text; null, missing and nested values are empty
fn text_field(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
