//! Configuration accepted when opening a source on a [`crate::Player`].

use mediacore_media_pipeline::PipelineConfig;
use mediacore_shared_types::MediaSessionConfig;

/// Top-level player configuration (spec §6 "player configuration").
///
/// Wraps [`MediaSessionConfig`] (the knobs the decoder/session layers
/// already understand) with the [`PipelineConfig`] this crate hands
/// straight through to `mediacore-media_pipeline` when it opens a source.
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Session-level preferences forwarded to the decoder factories.
    pub session: MediaSessionConfig,
    /// Worker queue sizing handed to `PlaybackController::open`.
    pub pipeline: PipelineConfig,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            session: MediaSessionConfig::default(),
            pipeline: PipelineConfig::default(),
        }
    }
}

impl PlayerConfig {
    /// Default configuration with hardware acceleration enabled.
    pub fn with_hardware_accel() -> Self {
        Self {
            session: MediaSessionConfig::default().with_hardware_accel(true),
            ..Self::default()
        }
    }

    /// Default configuration tuned for low-latency playback: smaller
    /// pipeline queues plus the matching session flag.
    pub fn low_latency() -> Self {
        Self {
            session: MediaSessionConfig::default().with_low_latency(true),
            pipeline: PipelineConfig::low_latency(),
        }
    }
}
