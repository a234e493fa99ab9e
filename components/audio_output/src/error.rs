//! Error types for audio output and resampling.

use mediacore_shared_types::MediaError;
use thiserror::Error;

/// Audio output error types.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AudioOutputError {
    /// No default output device is available on this host.
    #[error("no audio output device available")]
    NoDevice,

    /// The device rejected the requested stream configuration.
    #[error("output device does not support rate={rate} channels={channels}")]
    UnsupportedConfig {
        /// Requested sample rate in Hz.
        rate: u32,
        /// Requested channel count.
        channels: u8,
    },

    /// Building or starting the cpal stream failed.
    #[error("failed to start output stream: {0}")]
    StreamFailed(String),

    /// A device operation was attempted before `init`.
    #[error("audio output used before initialization")]
    NotInitialized,

    /// `flush` was called while the stream was still running.
    #[error("flush requires the output to be paused or stopped first")]
    FlushWhilePlaying,

    /// Resampling failed.
    #[error("resample failed: {0}")]
    ResampleFailed(String),
}

/// Result type for audio output operations.
pub type AudioOutputResult<T> = Result<T, AudioOutputError>;

impl From<AudioOutputError> for MediaError {
    fn from(err: AudioOutputError) -> Self {
        match err {
            AudioOutputError::NoDevice => MediaError::DeviceNotFound(err.to_string()),
            AudioOutputError::UnsupportedConfig { .. } => MediaError::UnsupportedAudioFormat(err.to_string()),
            AudioOutputError::StreamFailed(_) => MediaError::DeviceInitFailed(err.to_string()),
            AudioOutputError::NotInitialized => MediaError::NotInitialized,
            AudioOutputError::FlushWhilePlaying => MediaError::InvalidStateTransition {
                from: "Playing".to_string(),
                to: "Flushed".to_string(),
            },
            AudioOutputError::ResampleFailed(_) => MediaError::ResampleError(err.to_string()),
        }
    }
}
