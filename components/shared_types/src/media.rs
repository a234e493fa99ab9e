//! Core data model for packets, frames, and timestamps flowing through the
//! pipeline (spec §3).

use crate::formats::{AudioFormat, HwBackend, PixelFormat};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Which elementary stream a packet or frame belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    /// The active video stream.
    Video,
    /// The active audio stream.
    Audio,
}

/// A presentation/decode timestamp scaled by a rational time base.
///
/// # Examples
///
/// ```
/// use mediacore_shared_types::MediaTimestamp;
///
/// let ts = MediaTimestamp::new(90_000, 90_000, (1, 90_000));
/// assert_eq!(ts.to_seconds(), 1.0);
/// assert_eq!(ts.to_milliseconds(), 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaTimestamp {
    /// Presentation timestamp, in `time_base` units.
    pub pts: i64,
    /// Decode timestamp, in `time_base` units.
    pub dts: i64,
    /// Rational time base as (numerator, denominator).
    pub time_base: (u32, u32),
}

impl MediaTimestamp {
    /// Creates a new timestamp.
    pub fn new(pts: i64, dts: i64, time_base: (u32, u32)) -> Self {
        Self {
            pts,
            dts,
            time_base,
        }
    }

    /// Converts the PTS to seconds using the rational time base.
    pub fn to_seconds(&self) -> f64 {
        let (num, den) = self.time_base;
        if den == 0 {
            return 0.0;
        }
        self.pts as f64 * num as f64 / den as f64
    }

    /// Converts the PTS to whole milliseconds.
    pub fn to_milliseconds(&self) -> i64 {
        (self.to_seconds() * 1000.0).round() as i64
    }
}

/// A compressed unit of one elementary stream, as produced by the demuxer.
///
/// Exclusively owned by the consuming decode task; released after
/// `SendPacket` (spec §3).
#[derive(Debug, Clone, PartialEq)]
pub struct Packet {
    /// Which stream this packet belongs to.
    pub stream: StreamKind,
    /// Compressed payload bytes.
    pub data: Vec<u8>,
    /// Presentation/decode timestamps.
    pub timestamp: MediaTimestamp,
    /// Whether this packet starts a keyframe/sync point.
    pub is_keyframe: bool,
}

impl Packet {
    /// Creates a new packet.
    pub fn new(stream: StreamKind, data: Vec<u8>, timestamp: MediaTimestamp, is_keyframe: bool) -> Self {
        Self {
            stream,
            data,
            timestamp,
            is_keyframe,
        }
    }
}

/// Refcounted handle to a GPU decode-target surface.
///
/// Valid only while the [`VideoFrame`] that carries it is alive in a queue
/// slot or being presented; no component may retain a raw handle past the
/// frame's lifetime (spec §3 invariant). The handle releases its slot back
/// to the owning pool when the last clone is dropped.
pub struct HwSurfaceHandle(Arc<HwSurfaceInner>);

struct HwSurfaceInner {
    id: u32,
    backend: HwBackend,
    release: Mutex<Option<Box<dyn FnOnce(u32) + Send>>>,
}

impl HwSurfaceHandle {
    /// Wraps a pool slot `id`, invoking `release` when the last clone drops.
    pub fn new(id: u32, backend: HwBackend, release: impl FnOnce(u32) + Send + 'static) -> Self {
        Self(Arc::new(HwSurfaceInner {
            id,
            backend,
            release: Mutex::new(Some(Box::new(release))),
        }))
    }

    /// The pool slot index this handle refers to.
    pub fn id(&self) -> u32 {
        self.0.id
    }

    /// The backend that owns this surface.
    pub fn backend(&self) -> HwBackend {
        self.0.backend
    }

    /// Number of live clones of this handle (i.e. the surface's refcount).
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl Clone for HwSurfaceHandle {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl fmt::Debug for HwSurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HwSurfaceHandle(id={}, backend={:?})", self.0.id, self.0.backend)
    }
}

impl PartialEq for HwSurfaceHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Drop for HwSurfaceInner {
    fn drop(&mut self) {
        if let Some(release) = self.release.lock().take() {
            release(self.id);
        }
    }
}

/// Metadata carried alongside a decoded video frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameMetadata {
    /// Whether the source packet was a keyframe.
    pub is_keyframe: bool,
    /// Raw decode timestamp, if known.
    pub dts: Option<i64>,
    /// Frame sequence number within its stream.
    pub sequence: Option<u64>,
    /// Seek generation this frame belongs to (spec §3/§4.10).
    pub generation: u64,
}

/// A decoded video picture.
///
/// Owned exclusively by its queue slot; moved (never cloned) to the
/// renderer, and released after `Present` (spec §3). When `hw_surface` is
/// set, `data` is empty and the pixel format is [`PixelFormat::Opaque`].
#[derive(Debug, Clone, PartialEq)]
pub struct VideoFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Pixel format (software plane layout, or an opaque hardware format).
    pub format: PixelFormat,
    /// Raw pixel data; empty when `hw_surface` is `Some`.
    pub data: Vec<u8>,
    /// Normalized presentation timestamp in milliseconds (spec §3 invariant).
    pub pts_ms: i64,
    /// Frame duration, if known from the source frame rate.
    pub duration: Option<Duration>,
    /// GPU surface handle, when decoded on the hardware path.
    pub hw_surface: Option<HwSurfaceHandle>,
    /// Additional metadata.
    pub metadata: FrameMetadata,
}

impl VideoFrame {
    /// Creates a new software-path video frame.
    pub fn new(width: u32, height: u32, format: PixelFormat, data: Vec<u8>, pts_ms: i64) -> Self {
        Self {
            width,
            height,
            format,
            data,
            pts_ms,
            duration: None,
            hw_surface: None,
            metadata: FrameMetadata::default(),
        }
    }

    /// Creates a new hardware-path video frame wrapping a GPU surface.
    pub fn new_hardware(
        width: u32,
        height: u32,
        surface: HwSurfaceHandle,
        pts_ms: i64,
    ) -> Self {
        Self {
            width,
            height,
            format: PixelFormat::Opaque(surface.backend()),
            data: Vec::new(),
            pts_ms,
            duration: None,
            hw_surface: Some(surface),
            metadata: FrameMetadata::default(),
        }
    }

    /// Returns the size of the software pixel data in bytes.
    pub fn data_size(&self) -> usize {
        self.data.len()
    }

    /// Whether this frame wraps a GPU surface rather than software pixels.
    pub fn is_hardware(&self) -> bool {
        self.hw_surface.is_some()
    }
}

/// Decoded PCM audio before resampling.
///
/// Transient: consumed immediately by the resampler and never queued
/// (spec §3).
#[derive(Debug, Clone, PartialEq)]
pub struct AudioFrame {
    /// Sample format as decoded.
    pub format: AudioFormat,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels.
    pub channels: u8,
    /// Planar or interleaved samples, in the decoder's native layout.
    pub samples: Vec<f32>,
    /// Normalized presentation timestamp in milliseconds.
    pub pts_ms: i64,
}

impl AudioFrame {
    /// Creates a new raw audio frame.
    pub fn new(
        format: AudioFormat,
        sample_rate: u32,
        channels: u8,
        samples: Vec<f32>,
        pts_ms: i64,
    ) -> Self {
        Self {
            format,
            sample_rate,
            channels,
            samples,
            pts_ms,
        }
    }

    /// Returns the number of samples per channel.
    pub fn sample_count(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.samples.len() / self.channels as usize
    }
}

/// PCM ready for the output device, in its target format.
///
/// Produced by the resampler; exclusively owned by its audio queue slot;
/// consumed (possibly partially) by the device callback (spec §3).
#[derive(Debug, Clone, PartialEq)]
pub struct ResampledAudioFrame {
    /// Interleaved PCM bytes in the device's target format.
    pub pcm_data: Vec<u8>,
    /// Number of samples per channel in this frame.
    pub sample_count: usize,
    /// Sample rate in Hz.
    pub rate: u32,
    /// Number of channels.
    pub channels: u8,
    /// Bytes per sample (per channel) in the target format.
    pub bytes_per_sample: usize,
    /// Normalized presentation timestamp in milliseconds.
    pub pts_ms: i64,
}

impl ResampledAudioFrame {
    /// Total byte length of one interleaved frame (all channels) of audio.
    pub fn frame_stride(&self) -> usize {
        self.bytes_per_sample * self.channels as usize
    }
}

/// Source of media to open (spec §6 URL schemes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// A local file path or network URL (`file`, `http(s)`, `rtsp`, `rtmp`, `udp`).
    Url {
        /// The source URL or path.
        url: String,
    },
    /// An in-memory buffer with an explicit MIME type.
    Buffer {
        /// Container bytes.
        data: Vec<u8>,
        /// MIME type of `data`.
        mime_type: String,
    },
}
