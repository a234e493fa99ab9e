//! Ogg container reader (Vorbis/Opus audio, Theora video), backed by the
//! `ogg` crate's [`PacketReader`].
//!
//! Ogg carries no explicit codec tag; each logical bitstream announces its
//! codec via a magic prefix on its first packet (`\x01vorbis`, `OpusHead`,
//! `\x80theora`). Everything after the identification packet for a known
//! stream is handed upstream as a packet; packets from streams we didn't
//! recognize are dropped at the source rather than forwarded with a guessed
//! codec.
//!
//! `ogg::PacketReader` has no cheap mid-stream resume point, so `read_packet`
//! replays the buffered bytes from the start on every call and skips past
//! packets already delivered; this crate only ever reads fully-buffered
//! sources (see `source.rs`), so the cost is bounded by file size, not by
//! playback duration.

use crate::container::ContainerDemuxer;
use mediacore_shared_types::{
    AudioCodec, AudioTrackInfo, MediaError, MediaInfo, MediaTimestamp, Packet, StreamKind,
    VideoCodec, VideoTrackInfo,
};
use ogg::PacketReader;
use std::collections::HashMap;
use std::io::Cursor;

#[derive(Clone, Copy)]
enum Codec {
    Vorbis,
    Opus,
    Theora,
}

struct LogicalStream {
    kind: StreamKind,
    codec: Codec,
    // Opus' granule position is always at an implicit 48kHz rate
    // regardless of the nominal sample rate it reports; Vorbis uses its
    // own sample rate directly.
    rate: u32,
}

pub(crate) struct OggContainer {
    bytes: Vec<u8>,
    streams: HashMap<u32, LogicalStream>,
    delivered: HashMap<u32, u64>,
    duration_ms: Option<u64>,
}

fn identify(data: &[u8]) -> Option<LogicalStream> {
    if data.len() >= 7 && data[0] == 0x01 && &data[1..7] == b"vorbis" {
        let rate = u32::from_le_bytes([data[12], data[13], data[14], data[15]]);
        return Some(LogicalStream {
            kind: StreamKind::Audio,
            codec: Codec::Vorbis,
            rate,
        });
    }
    if data.len() >= 8 && &data[0..8] == b"OpusHead" {
        return Some(LogicalStream {
            kind: StreamKind::Audio,
            codec: Codec::Opus,
            rate: 48_000,
        });
    }
    if data.len() >= 7 && data[0] == 0x80 && &data[1..7] == b"theora" {
        return Some(LogicalStream {
            kind: StreamKind::Video,
            codec: Codec::Theora,
            rate: 0,
        });
    }
    None
}

impl ContainerDemuxer for OggContainer {
    fn open(bytes: Vec<u8>) -> Result<(Self, MediaInfo), MediaError> {
        let mut reader = PacketReader::new(Cursor::new(bytes.clone()));
        let mut streams: HashMap<u32, LogicalStream> = HashMap::new();
        let mut media_info = MediaInfo::default();
        let mut last_absgp: HashMap<u32, u64> = HashMap::new();

        loop {
            let packet = match reader.read_packet() {
                Ok(Some(p)) => p,
                Ok(None) => break,
                Err(e) => return Err(MediaError::DemuxError(format!("ogg: {e}"))),
            };
            let serial = packet.stream_serial;
            if !streams.contains_key(&serial) {
                if let Some(stream) = identify(&packet.data) {
                    match stream.kind {
                        StreamKind::Audio => media_info.audio_tracks.push(AudioTrackInfo {
                            id: serial,
                            codec: match stream.codec {
                                Codec::Vorbis => AudioCodec::Vorbis,
                                Codec::Opus => AudioCodec::Opus {
                                    sample_rate: stream.rate,
                                    channels: 2,
                                    application: mediacore_shared_types::OpusApplication::Audio,
                                },
                                Codec::Theora => unreachable!(),
                            },
                            sample_rate: stream.rate,
                            channels: 2,
                        }),
                        StreamKind::Video => media_info.video_tracks.push(VideoTrackInfo {
                            id: serial,
                            codec: VideoCodec::Theora,
                            width: 0,
                            height: 0,
                            frame_rate: None,
                        }),
                    }
                    streams.insert(serial, stream);
                }
            }
            last_absgp.insert(serial, packet.absgp_page);
        }

        if media_info.video_tracks.is_empty() && media_info.audio_tracks.is_empty() {
            return Err(MediaError::StreamNotFound("no recognizable Ogg logical stream".to_string()));
        }

        let duration_ms = streams
            .iter()
            .filter_map(|(serial, s)| {
                let absgp = *last_absgp.get(serial)?;
                if s.rate == 0 {
                    None
                } else {
                    Some(absgp * 1000 / s.rate as u64)
                }
            })
            .max();
        media_info.duration = duration_ms.map(std::time::Duration::from_millis);

        let delivered = streams.keys().map(|&serial| (serial, 0)).collect();

        Ok((
            Self {
                bytes,
                streams,
                delivered,
                duration_ms,
            },
            media_info,
        ))
    }

    fn read_packet(&mut self) -> Result<Option<Packet>, MediaError> {
        let mut reader = PacketReader::new(Cursor::new(self.bytes.clone()));
        let mut seen: HashMap<u32, u64> = HashMap::new();

        loop {
            let packet = match reader.read_packet() {
                Ok(Some(p)) => p,
                Ok(None) => return Ok(None),
                Err(e) => return Err(MediaError::DemuxError(format!("ogg: {e}"))),
            };
            let serial = packet.stream_serial;
            let Some(stream) = self.streams.get(&serial) else {
                continue;
            };
            let count = seen.entry(serial).or_insert(0);
            let already_delivered = *self.delivered.get(&serial).unwrap_or(&0);
            if *count < already_delivered {
                *count += 1;
                continue;
            }

            let pts_ms = if stream.rate > 0 {
                packet.absgp_page * 1000 / stream.rate as u64
            } else {
                0
            };
            let timestamp = MediaTimestamp::new(pts_ms as i64, pts_ms as i64, (1, 1000));
            let is_keyframe = matches!(stream.codec, Codec::Vorbis | Codec::Opus) || packet.last_packet;
            let kind = stream.kind;
            *self.delivered.entry(serial).or_insert(0) += 1;
            return Ok(Some(Packet::new(kind, packet.data, timestamp, is_keyframe)));
        }
    }

    fn seek(&mut self, target_ms: u64, backward: bool) -> Result<(), MediaError> {
        let _ = (target_ms, backward);
        Err(MediaError::DemuxError(
            "Ogg seeking requires granule-position page indexing not implemented by this reader".to_string(),
        ))
    }

    fn duration_ms(&self) -> Option<u64> {
        self.duration_ms
    }
}
