//! MP3 audio decoder implementation
//!
//! Provides decoding of MP3-encoded audio packets to PCM samples.

use mediacore_shared_types::{AudioFormat, AudioFrame, DecodeStatus, Decoder, MediaError, Packet};
use minimp3::Decoder as Mp3Codec;
use std::collections::VecDeque;

/// MP3 audio decoder
///
/// Decodes MP3-encoded audio packets into PCM audio frames. minimp3 has no
/// persistent decode state across frames worth keeping between packets, so
/// each `send_packet` opens a fresh `minimp3::Decoder` over that packet's
/// bytes.
///
/// # Examples
///
/// ```no_run
/// use mediacore_audio_decoders::MP3Decoder;
///
/// let decoder = MP3Decoder::new().expect("Failed to create decoder");
/// ```
pub struct MP3Decoder {
    pending: VecDeque<AudioFrame>,
}

impl MP3Decoder {
    /// Create a new MP3 decoder
    pub fn new() -> Result<Self, MediaError> {
        Ok(Self {
            pending: VecDeque::new(),
        })
    }
}

impl Decoder<AudioFrame> for MP3Decoder {
    fn send_packet(&mut self, packet: &Packet) -> Result<(), MediaError> {
        if packet.data.is_empty() {
            return Err(MediaError::SendFailed("empty MP3 packet".to_string()));
        }

        let cursor = std::io::Cursor::new(packet.data.clone());
        let mut temp_decoder = Mp3Codec::new(cursor);

        let frame = temp_decoder
            .next_frame()
            .map_err(|e| MediaError::DecoderError(format!("MP3 decode error: {:?}", e)))?;

        let samples: Vec<f32> = frame.data.iter().map(|&s| s as f32 / 32768.0).collect();
        let pts_ms = packet.timestamp.to_milliseconds();

        self.pending.push_back(AudioFrame::new(
            AudioFormat::F32LE,
            frame.sample_rate as u32,
            frame.channels as u8,
            samples,
            pts_ms,
        ));

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
