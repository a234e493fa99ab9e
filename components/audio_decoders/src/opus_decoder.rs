//! Opus audio decoder implementation
//!
//! Provides decoding of Opus-encoded audio packets to PCM samples.

use mediacore_shared_types::{AudioFormat, AudioFrame, DecodeStatus, Decoder, MediaError, Packet};
use opus::{Channels, Decoder as OpusCodec};
use std::collections::VecDeque;

/// Opus audio decoder
///
/// Decodes Opus-encoded audio packets into PCM audio frames. Opus supports
/// sample rates of 8000, 12000, 16000, 24000, and 48000 Hz. libopus decodes
/// synchronously and produces at most one frame per packet, so `pending`
/// never holds more than one entry.
///
/// # Examples
///
/// ```no_run
/// use mediacore_audio_decoders::OpusDecoder;
/// use mediacore_shared_types::Decoder;
///
/// let mut decoder = OpusDecoder::new(48000, 2).expect("Failed to create decoder");
/// ```
pub struct OpusDecoder {
    decoder: OpusCodec,
    sample_rate: u32,
    channels: u8,
    pending: VecDeque<AudioFrame>,
}

impl OpusDecoder {
    /// Create a new Opus decoder
    ///
    /// # Errors
    ///
    /// Returns `MediaError::UnsupportedAudioFormat` if `sample_rate` is not
    /// one of the supported values or `channels` is not 1 or 2, and
    /// `MediaError::DecoderInitFailed` if libopus itself fails to
    /// initialize.
    pub fn new(sample_rate: u32, channels: u8) -> Result<Self, MediaError> {
        if ![8000, 12000, 16000, 24000, 48000].contains(&sample_rate) {
            return Err(MediaError::UnsupportedAudioFormat(format!(
                "Opus decoder requires sample rate of 8000, 12000, 16000, 24000, or 48000 Hz, got {}",
                sample_rate
            )));
        }

        if channels == 0 || channels > 2 {
            return Err(MediaError::UnsupportedAudioFormat(format!(
                "Opus decoder supports 1 or 2 channels, got {}",
                channels
            )));
        }

        let opus_channels = if channels == 1 {
            Channels::Mono
        } else {
            Channels::Stereo
        };

        let decoder = OpusCodec::new(sample_rate, opus_channels)
            .map_err(|e| MediaError::DecoderInitFailed(format!("libopus: {}", e)))?;

        Ok(Self {
            decoder,
            sample_rate,
            channels,
            pending: VecDeque::new(),
        })
    }
}

impl Decoder<AudioFrame> for OpusDecoder {
    fn send_packet(&mut self, packet: &Packet) -> Result<(), MediaError> {
        if packet.data.is_empty() {
            return Err(MediaError::SendFailed("empty Opus packet".to_string()));
        }

        // Opus frames run up to 120ms at 48kHz = 5760 samples per channel.
        let max_frame_size = 5760;
        let mut output = vec![0f32; max_frame_size * self.channels as usize];

        let samples_decoded = self
            .decoder
            .decode_float(&packet.data, &mut output, false)
            .map_err(|e| MediaError::DecoderError(format!("Opus decode error: {}", e)))?;

        output.truncate(samples_decoded * self.channels as usize);

        let pts_ms = packet.timestamp.to_milliseconds();
        self.pending
            .push_back(AudioFrame::new(AudioFormat::F32LE, self.sample_rate, self.channels, output, pts_ms));

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
