//! Property-based and table tests for payload decoding

mod common;

use common::Harness;
use play_status::{decode_update, SongRecord};
use proptest::prelude::*;
use rstest::rstest;
use serde_json::{json, Map, Value};

// ============================================================================
// Strategies
// ============================================================================

/// Text fields a song record may carry
const TEXT_FIELDS: [&str; 4] = ["id", "name", "artist", "album"];

/// A song object with a random subset of fields present
fn song_object_strategy() -> impl Strategy<Value = Map<String, Value>> {
    (
        prop::collection::vec(prop::option::of("[a-zA-Z0-9 ]{0,12}"), 4),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(texts, starred)| {
            let mut object = Map::new();
            for (key, text) in TEXT_FIELDS.iter().zip(texts) {
                if let Some(text) = text {
                    object.insert(key.to_string(), Value::String(text));
                }
            }
            if let Some(starred) = starred {
                object.insert("starred".to_string(), Value::Bool(starred));
            }
            object
        })
}

/// Any JSON value that is not an object
fn non_object_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,8}".prop_map(Value::String),
        Just(json!([])),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Missing text fields decode as empty strings, present ones verbatim
    #[test]
    fn prop_missing_fields_default_to_empty(object in song_object_strategy()) {
        let payload = json!({"now_playing": Value::Object(object.clone()), "songs": []});
        let update = decode_update(&payload).expect("well-formed payload");

        let decoded = [
            &update.playing.id,
            &update.playing.name,
            &update.playing.artist,
            &update.playing.album,
        ];
        for (key, value) in TEXT_FIELDS.iter().zip(decoded) {
            let expected = object.get(*key).and_then(Value::as_str).unwrap_or("");
            prop_assert_eq!(value.as_str(), expected);
        }

        let expected_starred = object.get("starred").and_then(Value::as_bool).unwrap_or(false);
        prop_assert_eq!(update.playing.starred, expected_starred);
    }

    /// N well-formed queue entries decode to N records in the same order
    #[test]
    fn prop_queue_preserves_length_and_order(
        queue in prop::collection::vec(song_object_strategy(), 0..16)
    ) {
        let songs: Vec<Value> = queue.iter().cloned().map(Value::Object).collect();
        let payload = json!({"now_playing": {}, "songs": songs});

        let update = decode_update(&payload).expect("well-formed payload");
        prop_assert_eq!(update.queued.len(), queue.len());

        for (record, object) in update.queued.iter().zip(&queue) {
            let expected_id = object.get("id").and_then(Value::as_str).unwrap_or("");
            prop_assert_eq!(record.id.as_str(), expected_id);
        }
    }

    /// Payloads without both containers produce nothing, end to end
    #[test]
    fn prop_incomplete_payload_is_discarded(
        now_playing in non_object_strategy(),
        keep_songs in any::<bool>(),
    ) {
        let harness = Harness::new();
        let mut updates = harness.core.subscribe_updates();
        harness.start_and_settle("app-key");

        let mut payload = Map::new();
        payload.insert("now_playing".to_string(), now_playing);
        if keep_songs {
            payload.insert("songs".to_string(), json!([{"id": "2"}]));
        }

        prop_assert!(!harness.core.on_raw_event(&Value::Object(payload)));
        prop_assert!(harness.core.last_update().is_none());
        prop_assert!(updates.try_recv().is_err());
        prop_assert!(harness.host.calls().is_empty());
    }
}

#[rstest]
#[case(json!({}), SongRecord::default())]
#[case(json!({"id": "7"}), SongRecord::new("7", "", "", "", false))]
#[case(json!({"name": "Song B", "starred": false}), SongRecord::new("", "Song B", "", "", false))]
#[case(json!({"artist": null, "album": null}), SongRecord::default())]
#[case(json!({"starred": 1}), SongRecord::default())]
#[case(json!({"starred": true}), SongRecord::new("", "", "", "", true))]
fn test_now_playing_defaults(#[case] now_playing: Value, #[case] expected: SongRecord) {
    let update = decode_update(&json!({"now_playing": now_playing, "songs": []})).unwrap();
    assert_eq!(update.playing, expected);
}

#[rstest]
#[case(json!({"now_playing": {}}))]
#[case(json!({"songs": []}))]
#[case(json!({"now_playing": [], "songs": []}))]
#[case(json!({"now_playing": {}, "songs": "none"}))]
#[case(json!({"now_playing": {}, "songs": null}))]
#[case(json!("update"))]
fn test_discarded_payloads(#[case] payload: Value) {
    assert!(decode_update(&payload).is_none());
}
