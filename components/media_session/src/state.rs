//! Metadata carried alongside a session's FSM state.
//!
//! The FSM itself ([`mediacore_shared_types::PlayerState`]) lives in
//! `shared_types` since every pipeline crate needs to reason about it; this
//! crate only adds the descriptive metadata a session accumulates as it
//! opens a source.

use std::time::Duration;

/// Media metadata associated with a session, populated once the demuxer
/// has probed the container (spec §4.1 `MediaInfo`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaMetadata {
    /// Media title
    pub title: Option<String>,
    /// Media artist
    pub artist: Option<String>,
    /// Media album
    pub album: Option<String>,
    /// Total duration
    pub duration: Duration,
    /// Number of video tracks
    pub video_track_count: usize,
    /// Number of audio tracks
    pub audio_track_count: usize,
}
