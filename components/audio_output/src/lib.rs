//! # audio_output Component
//!
//! Resampling and device playback for decoded audio (spec §4.5/§4.6).
//!
//! - [`AudioResampler`] converts a decoder's native PCM to the output
//!   device's rate/channel layout, with an identity fast path when no
//!   conversion is needed.
//! - [`AudioPlayer`] implements [`mediacore_shared_types::AudioOutput`] on
//!   top of `cpal`'s default output device.

#![warn(missing_docs)]

mod device;
mod error;
mod resampler;

pub use device::AudioPlayer;
pub use error::{AudioOutputError, AudioOutputResult};
pub use resampler::AudioResampler;
