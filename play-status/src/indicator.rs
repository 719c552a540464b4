//! Persistent status indicator
//!
//! The indicator is what the user sees outside the app while the core is
//! running. The core only decides its content; drawing it is up to the
//! host through [`IndicatorHost`].

use serde::{Deserialize, Serialize};

use crate::model::SongRecord;

/// What tapping the indicator does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorAction {
    /// Bring the host UI to the front
    OpenApp,
}

/// Content of the status indicator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusIndicator {
    /// Icon name
    pub icon: String,
    /// Ongoing indicators cannot be dismissed by the user
    pub ongoing: bool,
    /// Short text announced when the indicator changes
    pub ticker: String,
    /// First line: the playing track's name
    pub title: String,
    /// Second line: artist and album
    pub body: String,
    /// Tap target
    pub action: IndicatorAction,
}

/// Host-side rendering of the indicator
///
/// `show` is called once, for the first update after start. Later updates
/// go through `update` with the same indicator mutated in place.
///
/// Callbacks run while the core's state lock is held and must not call
/// back into [`StatusCore`](crate::StatusCore); doing so deadlocks.
pub trait IndicatorHost: Send + Sync {
    /// Make the indicator visible for the first time
    fn show(&self, indicator: &StatusIndicator);

    /// Redraw an already visible indicator
    fn update(&self, indicator: &StatusIndicator);

    /// Remove the indicator
    fn remove(&self);
}

/// Texts for the indicator, built from host templates
#[derive(Debug, Clone)]
pub struct IndicatorTemplates {
    pub ticker: String,
    pub content: String,
}

impl IndicatorTemplates {
    pub fn ticker_for(&self, song: &SongRecord) -> String {
        format_template(&self.ticker, &[&song.name, &song.artist])
    }

    pub fn body_for(&self, song: &SongRecord) -> String {
        format_template(&self.content, &[&song.artist, &song.album])
    }
}

/// Substitute positional `{N}` slots with `args[N]`
///
/// Slots without a matching argument are left as written.
pub fn format_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let slot = after.find('}').and_then(|close| {
            after[..close]
                .parse::<usize>()
                .ok()
                .and_then(|index| args.get(index))
                .map(|arg| (close, *arg))
        });

        match slot {
            Some((close, arg)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
