//! AAC audio decoder implementation
//!
//! Provides decoding of AAC-encoded audio packets to PCM samples.

use mediacore_shared_types::{AudioFormat, AudioFrame, DecodeStatus, Decoder, MediaError, Packet};
use std::collections::VecDeque;
use std::io::Cursor;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// AAC audio decoder
///
/// Decodes AAC-encoded audio packets into PCM audio frames using Symphonia.
/// Each ADTS-framed packet carries its own self-describing header, so every
/// `send_packet` re-probes and re-decodes that packet independently rather
/// than keeping a Symphonia `FormatReader` open across calls.
///
/// # Examples
///
/// ```no_run
/// use mediacore_audio_decoders::AACDecoder;
///
/// let decoder = AACDecoder::new().expect("Failed to create decoder");
/// ```
pub struct AACDecoder {
    pending: VecDeque<AudioFrame>,
}

impl AACDecoder {
    /// Create a new AAC decoder
    pub fn new() -> Result<Self, MediaError> {
        Ok(Self {
            pending: VecDeque::new(),
        })
    }

    fn decode_with_symphonia(&self, data: &[u8]) -> Result<(Vec<f32>, u32, u8), MediaError> {
        let owned_data = data.to_vec();
        let cursor = Cursor::new(owned_data);
        let media_source = MediaSourceStream::new(Box::new(cursor), Default::default());

        let mut hint = Hint::new();
        hint.with_extension("aac");

        let format_opts = FormatOptions::default();
        let metadata_opts = MetadataOptions::default();

        let probed = symphonia::default::get_probe()
            .format(&hint, media_source, &format_opts, &metadata_opts)
            .map_err(|e| MediaError::DecoderError(format!("failed to probe AAC format: {}", e)))?;

        let mut format = probed.format;

        let track = format
            .default_track()
            .ok_or_else(|| MediaError::DecoderError("no default track found in AAC stream".to_string()))?;

        let decoder_opts = DecoderOptions::default();
        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &decoder_opts)
            .map_err(|e| MediaError::DecoderInitFailed(format!("symphonia AAC: {}", e)))?;

        let packet = format
            .next_packet()
            .map_err(|e| MediaError::DecoderError(format!("failed to read AAC packet: {}", e)))?;

        let decoded = decoder
            .decode(&packet)
            .map_err(|e| MediaError::DecoderError(format!("failed to decode AAC packet: {}", e)))?;

        let (samples, sample_rate, channels) = match decoded {
            AudioBufferRef::F32(buf) => {
                let samples: Vec<f32> = buf.chan(0).to_vec();
                let spec = buf.spec();
                (samples, spec.rate, spec.channels.count() as u8)
            }
            AudioBufferRef::S16(buf) => {
                let samples: Vec<f32> = buf.chan(0).iter().map(|&s| s as f32 / 32768.0).collect();
                let spec = buf.spec();
                (samples, spec.rate, spec.channels.count() as u8)
            }
            _ => return Err(MediaError::UnsupportedAudioFormat("unsupported AAC sample format".to_string())),
        };

        Ok((samples, sample_rate, channels))
    }
}

impl Decoder<AudioFrame> for AACDecoder {
    fn send_packet(&mut self, packet: &Packet) -> Result<(), MediaError> {
        if packet.data.is_empty() {
            return Err(MediaError::SendFailed("empty AAC packet".to_string()));
        }

        let (samples, sample_rate, channels) = self.decode_with_symphonia(&packet.data)?;
        let pts_ms = packet.timestamp.to_milliseconds();

        self.pending
            .push_back(AudioFrame::new(AudioFormat::F32LE, sample_rate, channels, samples, pts_ms));

        Ok(())
    }

    fn receive_frame(&mut self) -> Result<(Option<AudioFrame>, DecodeStatus), MediaError> {
        Ok((self.pending.pop_front(), DecodeStatus::NeedMoreInput))
    }

    fn flush(&mut self) -> Result<(), MediaError> {
        self.pending.clear();
        Ok(())
    }

    fn close(&mut self) -> Result<(), MediaError> {
        self.pending.clear();
        Ok(())
    }
}
