//! Playback adapters

mod noop;

pub use noop::NoOpPlaybackDriver;
