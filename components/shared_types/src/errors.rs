//! Error taxonomy for the playback pipeline
//!
//! Every fallible boundary in the pipeline returns a [`MediaError`]. The
//! variants are grouped the way the spec's error taxonomy groups them
//! (general, container/IO, decoding, rendering, audio, networking,
//! synchronization, system) rather than by which crate raised them, so a
//! caller can match on severity without knowing which component failed.

use thiserror::Error;

/// Unified error type for every pipeline operation.
///
/// Transient conditions (`try-again`, `would-block`) are deliberately not
/// represented here — callers that hit those loop or wait instead of
/// treating them as failures. End-of-stream is likewise a sentinel, not an
/// error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MediaError {
    // --- general ---
    /// An argument was invalid for the operation attempted.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
    /// The component was used before it was initialized.
    #[error("component not initialized")]
    NotInitialized,
    /// The operation requires the component to be idle, but it is already running.
    #[error("already running")]
    AlreadyRunning,

    // --- container / IO ---
    /// A read or write against the underlying storage/stream failed.
    #[error("I/O error: {0}")]
    IOError(String),
    /// The container could not be parsed as any known format.
    #[error("invalid container format: {0}")]
    InvalidFormat(String),
    /// The requested stream kind was not found in the container.
    #[error("stream not found: {0}")]
    StreamNotFound(String),
    /// The demuxer failed for a reason not covered by the other variants.
    #[error("demux error: {0}")]
    DemuxError(String),

    // --- decoding ---
    /// The decoder reported a failure decoding a packet.
    #[error("decoder error: {0}")]
    DecoderError(String),
    /// No decoder is registered for the requested codec.
    #[error("decoder not found for codec: {0}")]
    DecoderNotFound(String),
    /// The codec is recognized but not supported by this build.
    #[error("unsupported codec: {0}")]
    UnsupportedCodec(String),
    /// The decoder failed to initialize.
    #[error("decoder init failed: {0}")]
    DecoderInitFailed(String),
    /// `SendPacket` failed for a non-transient reason.
    #[error("send failed: {0}")]
    SendFailed(String),
    /// `ReceivePendingFrames` failed for a non-transient reason.
    #[error("receive failed: {0}")]
    ReceiveFailed(String),

    // --- rendering ---
    /// The renderer reported a failure not covered by the other variants.
    #[error("render error: {0}")]
    RenderError(String),
    /// The render target (window handle, surface) was invalid.
    #[error("invalid render target")]
    InvalidTarget,
    /// The GPU device/context was lost and must be recreated.
    #[error("render context lost")]
    ContextLost,
    /// A texture or swapchain resource failed to allocate.
    #[error("texture create failed: {0}")]
    TextureCreateFailed(String),

    // --- audio ---
    /// The audio subsystem reported a failure not covered by other variants.
    #[error("audio error: {0}")]
    AudioError(String),
    /// The audio output device reported a failure.
    #[error("audio output error: {0}")]
    OutputError(String),
    /// The requested audio format is not supported by the device.
    #[error("unsupported audio format: {0}")]
    UnsupportedAudioFormat(String),
    /// Resampling failed.
    #[error("resample error: {0}")]
    ResampleError(String),
    /// No audio output device was found.
    #[error("audio device not found")]
    DeviceNotFound,
    /// The audio output device failed to initialize.
    #[error("audio device init failed: {0}")]
    DeviceInitFailed(String),

    // --- networking ---
    /// A network error not covered by the other variants.
    #[error("network error: {0}")]
    NetworkError(String),
    /// An operation exceeded its deadline.
    #[error("operation timed out")]
    Timeout,
    /// The remote end refused the connection.
    #[error("connection refused")]
    Refused,
    /// The URL could not be parsed or has an unsupported scheme.
    #[error("invalid URL: {0}")]
    InvalidURL(String),
    /// The host could not be reached.
    #[error("host unreachable")]
    Unreachable,

    // --- synchronization ---
    /// A synchronization invariant was violated.
    #[error("sync error: {0}")]
    SyncError(String),
    /// The clock reported an inconsistent state.
    #[error("clock error: {0}")]
    ClockError(String),

    // --- system ---
    /// The system is out of memory.
    #[error("out of memory")]
    OutOfMemory,
    /// A worker thread failed to start or panicked.
    #[error("thread error: {0}")]
    ThreadError(String),
    /// An invalid state transition was attempted.
    #[error("invalid state transition: {from:?} -> {to:?}")]
    InvalidStateTransition {
        /// The state the FSM was in.
        from: crate::session::PlayerState,
        /// The state that was requested.
        to: crate::session::PlayerState,
    },
}

/// Result type for every pipeline operation.
pub type MediaResult<T> = Result<T, MediaError>;
