//! Shared helpers for play-status integration tests

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use play_status::{IndicatorHost, StatusConfig, StatusCore, StatusIndicator};
use play_subscription::testing::RecordingTransport;
use serde_json::{json, Value};

pub const WAIT: Duration = Duration::from_secs(2);

/// One call observed by [`RecordingHost`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndicatorCall {
    Show(StatusIndicator),
    Update(StatusIndicator),
    Remove,
}

/// Indicator host that records what it was asked to draw
#[derive(Default)]
pub struct RecordingHost {
    calls: Mutex<Vec<IndicatorCall>>,
}

impl RecordingHost {
    pub fn calls(&self) -> Vec<IndicatorCall> {
        self.calls.lock().clone()
    }
}

impl IndicatorHost for RecordingHost {
    fn show(&self, indicator: &StatusIndicator) {
        self.calls.lock().push(IndicatorCall::Show(indicator.clone()));
    }

    fn update(&self, indicator: &StatusIndicator) {
        self.calls
            .lock()
            .push(IndicatorCall::Update(indicator.clone()));
    }

    fn remove(&self) {
        self.calls.lock().push(IndicatorCall::Remove);
    }
}

/// A core wired to a recording transport and host
pub struct Harness {
    pub core: StatusCore,
    pub transport: RecordingTransport,
    pub host: Arc<RecordingHost>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(StatusConfig::default())
    }

    pub fn with_config(config: StatusConfig) -> Self {
        let transport = RecordingTransport::new();
        let host = Arc::new(RecordingHost::default());
        let core = StatusCore::new(config, Arc::new(transport.clone()), host.clone())
            .expect("core should start");

        Self {
            core,
            transport,
            host,
        }
    }

    /// Start with `credential` and wait until the subscription is bound
    pub fn start_and_settle(&self, credential: &str) {
        self.core.start(credential).expect("start should dispatch");
        assert!(self.core.flush(WAIT), "worker did not settle");
    }
}

/// Payload with one playing song and the given queue ids
pub fn payload(name: &str, queue: &[&str]) -> Value {
    let songs: Vec<Value> = queue
        .iter()
        .map(|id| json!({"id": id, "name": format!("Song {}", id)}))
        .collect();

    json!({
        "now_playing": {"id": "1", "name": name, "artist": "Artist", "album": "Album", "starred": true},
        "songs": songs
    })
}
