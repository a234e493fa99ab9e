//! # shared_types
//!
//! Common types, enums, and traits shared by every stage of the playback
//! pipeline: demuxer, decoders, hardware context, resampler, audio/video
//! players, renderer, and the state manager.
//!
//! # Overview
//!
//! - **Codec Types**: [`VideoCodec`], [`AudioCodec`] and their configuration
//! - **Formats**: [`PixelFormat`], [`AudioFormat`], [`HwBackend`]
//! - **Media Data**: [`Packet`], [`VideoFrame`], [`AudioFrame`], [`ResampledAudioFrame`]
//! - **Errors**: [`MediaError`], the full propagation taxonomy
//! - **Sessions**: [`SessionId`], [`PlayerState`], [`SeekRequest`]
//! - **Traits**: [`Demuxer`], [`Decoder`], [`AudioOutput`], [`Renderer`]
//!
//! # Examples
//!
//! Creating a video codec specification:
//!
//! ```
//! use mediacore_shared_types::{VideoCodec, H264Profile, H264Level};
//!
//! let codec = VideoCodec::H264 {
//!     profile: H264Profile::High,
//!     level: H264Level::Level4_1,
//!     hardware_accel: true,
//! };
//! ```
//!
//! Creating a software-path video frame:
//!
//! ```
//! use mediacore_shared_types::{VideoFrame, PixelFormat};
//!
//! let frame = VideoFrame::new(1920, 1080, PixelFormat::YUV420, vec![0u8; 1920 * 1080], 0);
//! assert_eq!(frame.data_size(), 1920 * 1080);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Module declarations
mod codecs;
mod errors;
mod formats;
mod media;
mod session;
mod traits;

// Re-export public API
pub use codecs::*;
pub use errors::*;
pub use formats::*;
pub use media::*;
pub use session::*;
pub use traits::*;
