//! Type definitions for the media pipeline

use mediacore_shared_types::PlayerState;

/// Configuration for the media pipeline's worker threads and queues (spec §5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Capacity of each demuxer packet queue (one per active stream).
    pub packet_queue_capacity: usize,
    /// Capacity of the decoded video frame queue between the video decode
    /// task and the Video Player's render loop (spec §4.6, default 30).
    pub video_frame_queue_capacity: usize,
    /// Capacity of the resampled audio frame queue between the Audio
    /// Resampler and the Audio Player's submit loop (spec §4.5, default 50).
    pub audio_frame_queue_capacity: usize,
    /// Whether to size queues for low-latency playback (spec §6
    /// `low_latency`): smaller capacities trade buffering for responsiveness.
    pub low_latency: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            packet_queue_capacity: 64,
            video_frame_queue_capacity: 30,
            audio_frame_queue_capacity: 50,
            low_latency: false,
        }
    }
}

impl PipelineConfig {
    /// A configuration with smaller queues for the `low_latency` session flag.
    pub fn low_latency() -> Self {
        Self {
            packet_queue_capacity: 16,
            video_frame_queue_capacity: 8,
            audio_frame_queue_capacity: 12,
            low_latency: true,
        }
    }
}

/// A point-in-time snapshot of pipeline state, for UI polling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackStats {
    /// The player's current FSM state.
    pub state: PlayerState,
    /// `master_clock(now)` in normalized milliseconds.
    pub master_clock_ms: i64,
    /// Smoothed audio/video drift estimate, statistics only.
    pub smoothed_drift_ms: f64,
    /// Number of packets currently queued for video decode.
    pub video_packet_queue_len: usize,
    /// Number of packets currently queued for audio decode.
    pub audio_packet_queue_len: usize,
    /// Number of decoded frames waiting for the Video Player's render loop.
    pub video_frame_queue_len: usize,
    /// Number of resampled frames waiting for the Audio Player's submit loop.
    pub audio_frame_queue_len: usize,
    /// Total video frames dropped by the sync policy so far.
    pub frames_dropped: u64,
}

/// Decision made by the A/V sync controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncDecision {
    /// Display the frame immediately
    Display,
    /// Drop the frame (too old)
    Drop,
    /// Wait before displaying
    Wait {
        /// Duration to wait
        duration: Duration,
    },
}
