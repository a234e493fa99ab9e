//! Decoder factory for creating audio decoders
//!
//! Provides a factory pattern for creating appropriate decoders based on codec type.

use crate::{AACDecoder, MP3Decoder, OpusDecoder, VorbisDecoder};
use mediacore_shared_types::{AudioCodec, AudioFrame, Decoder, MediaError};

/// Factory for creating audio decoders
///
/// Provides a centralized way to create decoders for different audio codecs.
///
/// # Examples
///
/// ```no_run
/// use mediacore_audio_decoders::DecoderFactory;
/// use mediacore_shared_types::{AudioCodec, OpusApplication};
///
/// let codec = AudioCodec::Opus {
///     sample_rate: 48000,
///     channels: 2,
///     application: OpusApplication::Audio,
/// };
///
/// let decoder = DecoderFactory::create_decoder(codec)
///     .expect("Failed to create decoder");
/// ```
pub struct DecoderFactory;

impl DecoderFactory {
    /// Create a decoder for the specified codec
    ///
    /// # Errors
    ///
    /// - `MediaError::UnsupportedCodec` — FLAC and PCM are not handled by
    ///   this factory (PCM needs no decode step at all).
    pub fn create_decoder(codec: AudioCodec) -> Result<Box<dyn Decoder<AudioFrame>>, MediaError> {
        match codec {
            AudioCodec::Opus {
                sample_rate,
                channels,
                ..
            } => {
                let decoder = OpusDecoder::new(sample_rate, channels)?;
                Ok(Box::new(decoder))
            }

            AudioCodec::MP3 { .. } => {
                let decoder = MP3Decoder::new()?;
                Ok(Box::new(decoder))
            }

            AudioCodec::AAC { .. } => {
                let decoder = AACDecoder::new()?;
                Ok(Box::new(decoder))
            }

            AudioCodec::Vorbis => Ok(Box::new(VorbisDecoder::new())),

            AudioCodec::FLAC => {
                Err(MediaError::UnsupportedCodec("FLAC decoding is not yet implemented".to_string()))
            }

            AudioCodec::PCM { .. } => {
                Err(MediaError::UnsupportedCodec("PCM does not require a decoder".to_string()))
            }
        }
    }
}
