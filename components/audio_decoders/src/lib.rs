//! # audio_decoders Component
//!
//! Audio codec implementations (AAC, MP3, Opus, Vorbis)
//!
//! This component provides decoder implementations for common audio codecs
//! used in media playback. Each decoder implements the push/pull
//! `Decoder<AudioFrame>` trait from `shared_types` and can be created via
//! the `DecoderFactory`.
//!
//! # Examples
//!
//! ```no_run
//! use mediacore_audio_decoders::{OpusDecoder, DecoderFactory};
//! use mediacore_shared_types::{AudioCodec, Decoder, OpusApplication};
//!
//! // Create an Opus decoder directly
//! let opus_decoder = OpusDecoder::new(48000, 2).expect("Failed to create decoder");
//!
//! // Or use the factory
//! let codec = AudioCodec::Opus {
//!     sample_rate: 48000,
//!     channels: 2,
//!     application: OpusApplication::Audio,
//! };
//! let decoder = DecoderFactory::create_decoder(codec).expect("Failed to create decoder");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export shared types for convenience
pub use mediacore_shared_types::{AudioCodec, AudioFrame, DecodeStatus, Decoder, MediaError, Packet};

// Module declarations
mod aac_decoder;
mod factory;
mod mp3_decoder;
mod opus_decoder;
mod vorbis_decoder;

// Re-export decoder implementations
pub use aac_decoder::AACDecoder;
pub use factory::DecoderFactory;
pub use mp3_decoder::MP3Decoder;
pub use opus_decoder::OpusDecoder;
pub use vorbis_decoder::VorbisDecoder;
