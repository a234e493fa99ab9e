//! Core interfaces implemented by each pipeline stage (spec §4).

use crate::codecs::{AudioCodec, VideoCodec};
use crate::errors::MediaError;
use crate::media::{AudioFrame, Packet, ResampledAudioFrame, VideoFrame};
use crate::session::PlayerState;
use std::time::Duration;

/// A time range of buffered media.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    /// Start time.
    pub start: Duration,
    /// End time.
    pub end: Duration,
}

impl TimeRange {
    /// Creates a new time range.
    pub fn new(start: Duration, end: Duration) -> Self {
        Self { start, end }
    }

    /// Returns the duration of this time range.
    pub fn duration(&self) -> Duration {
        self.end.saturating_sub(self.start)
    }

    /// Checks whether a time point is contained in this range.
    pub fn contains(&self, time: Duration) -> bool {
        time >= self.start && time <= self.end
    }
}

/// Per-protocol options applied when opening a network URL (spec §4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolOptions {
    /// Force TCP transport (vs. UDP) where the protocol allows a choice.
    pub force_tcp: bool,
    /// Read-ahead buffer size in bytes.
    pub buffer_bytes: u64,
    /// Connect/read timeout.
    pub timeout: Duration,
    /// Maximum delay the demuxer may introduce while reconnecting.
    pub max_reconnect_delay: Duration,
}

impl ProtocolOptions {
    /// HTTP/HTTPS: reconnect, 10 MB buffer, 5 s max reconnect delay.
    pub const HTTP: Self = Self {
        force_tcp: true,
        buffer_bytes: 10 * 1024 * 1024,
        timeout: Duration::from_secs(5),
        max_reconnect_delay: Duration::from_secs(5),
    };

    /// RTSP/RTMP: forced TCP transport, 5 MB buffer, 2 s connect timeout.
    pub const RTSP_RTMP: Self = Self {
        force_tcp: true,
        buffer_bytes: 5 * 1024 * 1024,
        timeout: Duration::from_secs(2),
        max_reconnect_delay: Duration::from_secs(2),
    };

    /// UDP: 1 MB buffer, 1 s timeout.
    pub const UDP: Self = Self {
        force_tcp: false,
        buffer_bytes: 1024 * 1024,
        timeout: Duration::from_secs(1),
        max_reconnect_delay: Duration::from_secs(1),
    };

    /// Local file: no network behavior applies.
    pub const LOCAL: Self = Self {
        force_tcp: false,
        buffer_bytes: 0,
        timeout: Duration::from_secs(0),
        max_reconnect_delay: Duration::from_secs(0),
    };
}

/// Media information surfaced once the demuxer has probed the container.
#[derive(Debug, Clone, Default)]
pub struct MediaInfo {
    /// Duration of the media, if known.
    pub duration: Option<Duration>,
    /// Video tracks present in the container.
    pub video_tracks: Vec<VideoTrackInfo>,
    /// Audio tracks present in the container.
    pub audio_tracks: Vec<AudioTrackInfo>,
    /// Media title, if present in metadata.
    pub title: Option<String>,
}

/// Video track information.
#[derive(Debug, Clone)]
pub struct VideoTrackInfo {
    /// Track ID as assigned by the container.
    pub id: u32,
    /// Codec parameters.
    pub codec: VideoCodec,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Frame rate, if known.
    pub frame_rate: Option<f64>,
}

/// Audio track information.
#[derive(Debug, Clone)]
pub struct AudioTrackInfo {
    /// Track ID as assigned by the container.
    pub id: u32,
    /// Codec parameters.
    pub codec: AudioCodec,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels.
    pub channels: u8,
}

/// Container format demuxer (spec §4.1).
///
/// A single demuxer picks one active video and one active audio stream
/// (first found) and emits packets only for those; packets for inactive
/// streams are silently skipped.
pub trait Demuxer: Send {
    /// Opens `url`, probing its streams. Network URLs receive
    /// protocol-specific options (see [`ProtocolOptions`]).
    fn open(&mut self, url: &str) -> Result<MediaInfo, MediaError>;

    /// Reads the next packet for an active stream, or `Ok(None)` at
    /// end-of-stream. Packets for inactive streams are skipped internally.
    fn read_packet(&mut self) -> Result<Option<Packet>, MediaError>;

    /// Repositions the container to `target_ms`, optionally biased to the
    /// nearest keyframe at-or-before the target (`backward`), and flushes
    /// internal demuxer state.
    fn seek(&mut self, target_ms: u64, backward: bool) -> Result<(), MediaError>;

    /// Total duration in milliseconds, if known.
    fn duration_ms(&self) -> Option<u64>;
}

/// Outcome of a decoder pull (spec §4.2 push/pull protocol).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    /// A frame was produced and is available.
    FrameReady,
    /// The decoder needs more input before it can produce another frame.
    NeedMoreInput,
}

/// A pipeline decoder, generic over the frame type it produces.
///
/// Implements the standard push/pull protocol: a `send_packet` may yield
/// zero or more frames across subsequent `receive_frame` calls;
/// `receive_pending_frames` drains until the decoder signals
/// [`DecodeStatus::NeedMoreInput`]. A send/receive failure carrying
/// "try again"/"would block" semantics is represented by returning
/// `Ok(DecodeStatus::NeedMoreInput)`/`Ok(None)` rather than an `Err` — those
/// are not fatal (spec §4.2).
pub trait Decoder<F>: Send {
    /// Submits one compressed packet for decoding.
    fn send_packet(&mut self, packet: &Packet) -> Result<(), MediaError>;

    /// Pulls the next available decoded frame, if any.
    fn receive_frame(&mut self) -> Result<(Option<F>, DecodeStatus), MediaError>;

    /// Drains every frame currently available without blocking for more input.
    fn receive_pending_frames(&mut self, out: &mut Vec<F>) -> Result<(), MediaError> {
        loop {
            let (frame, status) = self.receive_frame()?;
            if let Some(frame) = frame {
                out.push(frame);
            }
            if status == DecodeStatus::NeedMoreInput {
                return Ok(());
            }
        }
    }

    /// Resets internal decoder state (used on seek and fallback).
    fn flush(&mut self) -> Result<(), MediaError>;

    /// Releases all decoder resources.
    fn close(&mut self) -> Result<(), MediaError>;
}

/// Video decoder specialization.
pub trait VideoDecoder: Decoder<VideoFrame> {}
impl<T: Decoder<VideoFrame>> VideoDecoder for T {}

/// Audio decoder specialization.
pub trait AudioDecoder: Decoder<AudioFrame> {}
impl<T: Decoder<AudioFrame>> AudioDecoder for T {}

/// Output device abstraction (spec §6 audio device contract).
pub trait AudioOutput: Send {
    /// Initializes the device for the given spec.
    fn init(&mut self, rate: u32, channels: u8, bits_per_sample: u16, buffer_size: usize) -> Result<(), MediaError>;

    /// Starts the device callback.
    fn start(&mut self) -> Result<(), MediaError>;

    /// Stops the device callback.
    fn stop(&mut self) -> Result<(), MediaError>;

    /// Pauses output without tearing down the device.
    fn pause(&mut self) -> Result<(), MediaError>;

    /// Resumes output after `pause`.
    fn resume(&mut self) -> Result<(), MediaError>;

    /// Enqueues a resampled frame for playback.
    fn submit(&mut self, frame: ResampledAudioFrame) -> Result<(), MediaError>;

    /// Sets output volume in `[0.0, 1.0]`.
    fn set_volume(&mut self, volume: f32) -> Result<(), MediaError>;

    /// Gets current output volume.
    fn get_volume(&self) -> f32;

    /// Drains the software queue and the device buffer. Must only be
    /// called while paused.
    fn flush(&mut self) -> Result<(), MediaError>;

    /// Human-readable device name.
    fn device_name(&self) -> String;

    /// Whether the device is currently running.
    fn is_playing(&self) -> bool;
}

/// Platform video renderer (spec §4.8), always accessed through a
/// thread-affinity proxy.
pub trait Renderer: Send {
    /// Creates swapchain/resources for `window_handle` at `width`x`height`.
    fn init(&mut self, window_handle: usize, width: u32, height: u32) -> Result<(), MediaError>;

    /// Submits a frame for display; must tolerate resolution/format change.
    fn render_frame(&mut self, frame: &VideoFrame) -> Result<(), MediaError>;

    /// Pushes the last submitted frame to the screen.
    fn present(&mut self) -> Result<(), MediaError>;

    /// Releases any per-frame cached resources (textures, views) so no
    /// dangling reference survives a seek.
    fn clear_caches(&mut self) -> Result<(), MediaError>;

    /// Recreates swapchain buffers for a new output size.
    fn on_resize(&mut self, width: u32, height: u32) -> Result<(), MediaError>;

    /// A human-readable name for the backend (e.g. the adapter/device name
    /// or `"software"`), for diagnostics. A thread-affinity proxy caches
    /// this after its first cross-thread call (spec §4.8).
    fn renderer_name(&self) -> String;
}

/// Observer of player state transitions (spec §6 state-change event).
///
/// Invoked synchronously on the caller's thread; observers are responsible
/// for marshaling to their own thread if needed.
pub trait StateObserver: Send + Sync {
    /// Called on every FSM transition.
    fn on_state_changed(&self, old_state: PlayerState, new_state: PlayerState);
}
