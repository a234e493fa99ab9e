//! Vorbis audio decoder implementation
//!
//! Provides decoding of raw Vorbis packets to PCM samples using lewton's
//! header/audio-packet API directly (no Ogg framing — the demuxer already
//! split the Ogg pages into elementary packets before handing them to the
//! decoder, per spec §3).

use lewton::audio::{read_audio_packet, PreviousWindowRight};
use lewton::header::{read_header_comment, read_header_ident, read_header_setup, IdentHeader, SetupHeader};
use mediacore_shared_types::{AudioFormat, AudioFrame, DecodeStatus, Decoder, MediaError, Packet};
use std::collections::VecDeque;

enum State {
    /// Waiting for the three Vorbis header packets (identification, comment, setup).
    AwaitingHeaders { ident: Option<IdentHeader>, comment_seen: bool },
    /// Headers parsed; ready to decode audio packets.
    Decoding { ident: IdentHeader, setup: SetupHeader, pwr: PreviousWindowRight },
}

/// Vorbis audio decoder
///
/// The first three packets `send_packet` sees must be the Vorbis
/// identification, comment, and setup headers, in that order, matching
/// Vorbis's own packetization rules; every packet after that is treated as
/// an audio packet.
///
/// # Examples
///
/// ```no_run
/// use mediacore_audio_decoders::VorbisDecoder;
///
/// let decoder = VorbisDecoder::new();
/// ```
pub struct VorbisDecoder {
    state: State,
    pending: VecDeque<AudioFrame>,
}

impl VorbisDecoder {
    /// Create a new Vorbis decoder, awaiting its header packets.
    pub fn new() -> Self {
        Self {
            state: State::AwaitingHeaders {
                ident: None,
                comment_seen: false,
            },
            pending: VecDeque::new(),
        }
    }
}

impl Default for VorbisDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder<AudioFrame> for VorbisDecoder {
    fn send_packet(&mut self, packet: &Packet) -> Result<(), MediaError> {
        if packet.data.is_empty() {
            return Err(MediaError::SendFailed("empty Vorbis packet".to_string()));
        }

        match &mut self.state {
            State::AwaitingHeaders { ident, comment_seen } if ident.is_none() => {
                let header = read_header_ident(&packet.data)
                    .map_err(|e| MediaError::DecoderInitFailed(format!("Vorbis ident header: {:?}", e)))?;
                *ident = Some(header);
                *comment_seen = false;
                Ok(())
            }
            State::AwaitingHeaders { comment_seen, .. } if !*comment_seen => {
                read_header_comment(&packet.data)
                    .map_err(|e| MediaError::DecoderInitFailed(format!("Vorbis comment header: {:?}", e)))?;
                *comment_seen = true;
                Ok(())
            }
            State::AwaitingHeaders { ident, .. } => {
                let ident = ident.take().expect("ident header already validated present");
                let setup = read_header_setup(&packet.data, ident.audio_channels, (ident.blocksize_0, ident.blocksize_1))
                    .map_err(|e| MediaError::DecoderInitFailed(format!("Vorbis setup header: {:?}", e)))?;
                self.state = State::Decoding {
                    ident,
                    setup,
                    pwr: PreviousWindowRight::new(),
                };
                Ok(())
            }
            State::Decoding { ident, setup, pwr } => {
                let decoded = read_audio_packet(ident, setup, &packet.data, pwr)
                    .map_err(|e| MediaError::DecoderError(format!("Vorbis audio packet: {:?}", e)))?;

                let channels = decoded.len().max(1) as u8;
                let frame_len = decoded.first().map(|c| c.len()).unwrap_or(0);
                let mut interleaved = Vec::with_capacity(frame_len * channels as usize);
                for i in 0..frame_len {
                    for channel in &decoded {
                        interleaved.push(*channel.get(i).unwrap_or(&0.0));
                    }
                }

                let pts_ms = packet.timestamp.to_milliseconds();
                self.pending.push_back(AudioFrame::new(
                    AudioFormat::F32LE,
                    ident.audio_sample_rate,
                    channels,
                    interleaved,
                    pts_ms,
                ));
                Ok(())
            }
        }
    }

    fn receive_frame(&mut self) -> Result<(Option<AudioFrame>, DecodeStatus), MediaError> {
        Ok((self.pending.pop_front(), DecodeStatus::NeedMoreInput))
    }

    fn flush(&mut self) -> Result<(), MediaError> {
        self.pending.clear();
        if let State::Decoding { pwr, .. } = &mut self.state {
            *pwr = PreviousWindowRight::new();
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), MediaError> {
        self.pending.clear();
        Ok(())
    }
}
