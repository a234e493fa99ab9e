//! # video_decoders Component
//!
//! Video codec implementations (H.264, VP9, AV1) behind a single push/pull
//! [`Decoder`] protocol, plus a hardware-path wrapper that falls back to
//! software on first-frame validation failure.
//!
//! # Examples
//!
//! ```no_run
//! use mediacore_video_decoders::DecoderFactory;
//! use mediacore_shared_types::{Decoder, VideoCodec, H264Profile, H264Level};
//!
//! let codec = VideoCodec::H264 {
//!     profile: H264Profile::High,
//!     level: H264Level::Level4_1,
//!     hardware_accel: false,
//! };
//! let mut decoder = DecoderFactory::create_decoder(codec).unwrap();
//!
//! let mut frames = Vec::new();
//! decoder.receive_pending_frames(&mut frames).unwrap();
//! ```

#![warn(missing_docs)]
// Note: unsafe code is required for FFI bindings to codec libraries
#![allow(unsafe_code)]

// Re-export shared types for convenience
pub use mediacore_shared_types::{DecodeStatus, Decoder, MediaError, Packet, VideoCodec, VideoDecoder, VideoFrame};

// Conditional compilation based on features
#[cfg(feature = "h264")]
mod h264;

#[cfg(feature = "vp9")]
mod vp9;

#[cfg(feature = "av1")]
mod av1;

mod factory;

// Re-export public APIs conditionally
#[cfg(feature = "h264")]
pub use h264::H264Decoder;

#[cfg(feature = "vp9")]
pub use vp9::VP9Decoder;

#[cfg(feature = "av1")]
pub use av1::AV1Decoder;

pub use factory::{DecoderFactory, HardwareVideoDecoder};
