//! Data model for jukebox playback state

pub mod song;
pub mod state_update;

pub use song::SongRecord;
pub use state_update::StateUpdate;
