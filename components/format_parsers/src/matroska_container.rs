//! Matroska (.mkv) and WebM (.webm) container reader.
//!
//! Both formats share the same EBML/Matroska element tree, so one reader
//! handles both; only the codec IDs found in practice differ. Built on
//! `webm-iterable`'s tag-level iterator rather than the `matroska` crate,
//! which parses segment metadata but has no path to a `SimpleBlock`'s raw
//! frame bytes. `SimpleBlock` payloads are plain Matroska binary (an EBML
//! vint track number, an i16 big-endian relative timecode, one flags byte,
//! then frame data) and are parsed by hand here.

use crate::container::ContainerDemuxer;
use mediacore_shared_types::{
    AudioCodec, AudioTrackInfo, MediaError, MediaInfo, MediaTimestamp, Packet, StreamKind,
    VideoCodec, VideoTrackInfo,
};
use std::collections::VecDeque;
use std::io::Cursor;
use webm_iterable::matroska_spec::{Master, MatroskaSpec};
use webm_iterable::WebmIterator;

struct TrackMeta {
    number: u64,
    kind: StreamKind,
}

pub(crate) struct MatroskaContainer {
    // The full element stream is buffered up front: webm-iterable's
    // iterator borrows nothing external but consumes its reader, so
    // re-seeking means rebuilding the iterator from the same bytes.
    bytes: Vec<u8>,
    tracks: Vec<TrackMeta>,
    timecode_scale_ns: u64,
    pending: VecDeque<Packet>,
    cursor_ms: u64,
    duration_ms: Option<u64>,
}

fn video_codec_for(codec_id: &str) -> VideoCodec {
    match codec_id {
        "V_VP9" => VideoCodec::VP9 {
            profile: mediacore_shared_types::VP9Profile::Profile0,
        },
        "V_VP8" => VideoCodec::VP8,
        "V_AV1" => VideoCodec::AV1 {
            profile: mediacore_shared_types::AV1Profile::Main,
            level: mediacore_shared_types::AV1Level::Level4_0,
        },
        "V_MPEGH/ISO/HEVC" => VideoCodec::H265 {
            profile: mediacore_shared_types::H265Profile::Main,
            tier: mediacore_shared_types::H265Tier::Main,
            level: mediacore_shared_types::H265Level::Level4_0,
        },
        "V_THEORA" => VideoCodec::Theora,
        // V_MPEG4/ISO/AVC and anything unrecognized.
        _ => VideoCodec::H264 {
            profile: mediacore_shared_types::H264Profile::Main,
            level: mediacore_shared_types::H264Level::Level4_1,
            hardware_accel: false,
        },
    }
}

fn audio_codec_for(codec_id: &str) -> AudioCodec {
    match codec_id {
        "A_OPUS" => AudioCodec::Opus {
            sample_rate: 48_000,
            channels: 2,
            application: mediacore_shared_types::OpusApplication::Audio,
        },
        "A_VORBIS" => AudioCodec::Vorbis,
        "A_FLAC" => AudioCodec::FLAC,
        "A_PCM/INT/LIT" => AudioCodec::PCM {
            format: mediacore_shared_types::PCMFormat::S16LE,
            sample_rate: 48_000,
            channels: 2,
        },
        // A_AAC and anything else unrecognized.
        _ => AudioCodec::AAC {
            profile: mediacore_shared_types::AACProfile::LC,
            sample_rate: 48_000,
            channels: 2,
        },
    }
}

/// Decodes an EBML variable-length integer, returning (value with the
/// length marker bits cleared, bytes consumed).
fn read_vint(bytes: &[u8]) -> Option<(u64, usize)> {
    let first = *bytes.first()?;
    if first == 0 {
        return None;
    }
    let len = first.leading_zeros() as usize + 1;
    if len > 8 || bytes.len() < len {
        return None;
    }
    let mask = 0xFFu8 >> len;
    let mut value = (first & mask) as u64;
    for &b in &bytes[1..len] {
        value = (value << 8) | b as u64;
    }
    Some((value, len))
}

struct SimpleBlockHeader {
    track_number: u64,
    relative_timecode: i16,
    keyframe: bool,
    payload_offset: usize,
}

fn parse_simple_block_header(data: &[u8]) -> Option<SimpleBlockHeader> {
    let (track_number, consumed) = read_vint(data)?;
    if data.len() < consumed + 3 {
        return None;
    }
    let relative_timecode = i16::from_be_bytes([data[consumed], data[consumed + 1]]);
    let flags = data[consumed + 2];
    Some(SimpleBlockHeader {
        track_number,
        relative_timecode,
        keyframe: flags & 0x80 != 0,
        payload_offset: consumed + 3,
    })
}

impl MatroskaContainer {
    fn track_kind(&self, number: u64) -> Option<StreamKind> {
        self.tracks.iter().find(|t| t.number == number).map(|t| t.kind)
    }

    /// Replays the element stream from the start, collecting every packet
    /// whose effective timestamp is at-or-after `from_ms`, into `pending`.
    fn refill_from(&mut self, from_ms: u64) -> Result<(), MediaError> {
        self.pending.clear();
        let iter = WebmIterator::new(Cursor::new(self.bytes.clone()), &[]);
        let mut cluster_timecode_ns: u64 = 0;

        for tag in iter {
            let tag = tag.map_err(|e| MediaError::DemuxError(format!("matroska: {e}")))?;
            match tag {
                MatroskaSpec::Timestamp(t) => {
                    cluster_timecode_ns = t.saturating_mul(self.timecode_scale_ns);
                }
                MatroskaSpec::SimpleBlock(Master::Full(data))
                | MatroskaSpec::Block(Master::Full(data)) => {
                    let Some(header) = parse_simple_block_header(&data) else {
                        continue;
                    };
                    let Some(kind) = self.track_kind(header.track_number) else {
                        continue;
                    };
                    let block_ns = cluster_timecode_ns
                        .saturating_add((header.relative_timecode as i64 * self.timecode_scale_ns as i64).max(0) as u64);
                    let ms = block_ns / 1_000_000;
                    if ms < from_ms {
                        continue;
                    }
                    let timestamp = MediaTimestamp::new(ms as i64, ms as i64, (1, 1000));
                    self.pending.push_back(Packet::new(
                        kind,
                        data[header.payload_offset..].to_vec(),
                        timestamp,
                        header.keyframe,
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl ContainerDemuxer for MatroskaContainer {
    fn open(bytes: Vec<u8>) -> Result<(Self, MediaInfo), MediaError> {
        let iter = WebmIterator::new(Cursor::new(bytes.clone()), &[]);
        let mut tracks = Vec::new();
        let mut media_info = MediaInfo::default();
        let mut timecode_scale_ns: u64 = 1_000_000;
        let mut duration_scaled: Option<f64> = None;

        let mut track_number = 0u64;
        let mut track_codec_id: Option<String> = None;
        let mut track_type = 0u64;
        let mut pixel_width = 0u32;
        let mut pixel_height = 0u32;
        let mut sample_rate = 0u32;
        let mut channels = 0u8;

        for tag in iter {
            let tag = tag.map_err(|e| MediaError::DemuxError(format!("matroska: {e}")))?;
            match tag {
                MatroskaSpec::TimestampScale(scale) => timecode_scale_ns = scale,
                MatroskaSpec::Duration(d) => duration_scaled = Some(d),
                MatroskaSpec::TrackEntry(Master::Start) => {
                    track_number = 0;
                    track_codec_id = None;
                    track_type = 0;
                    pixel_width = 0;
                    pixel_height = 0;
                    sample_rate = 0;
                    channels = 0;
                }
                MatroskaSpec::TrackNumber(n) => track_number = n,
                MatroskaSpec::CodecID(id) => track_codec_id = Some(id),
                MatroskaSpec::TrackType(t) => track_type = t,
                MatroskaSpec::PixelWidth(w) => pixel_width = w as u32,
                MatroskaSpec::PixelHeight(h) => pixel_height = h as u32,
                MatroskaSpec::SamplingFrequency(r) => sample_rate = r as u32,
                MatroskaSpec::Channels(c) => channels = c as u8,
                MatroskaSpec::TrackEntry(Master::End) => {
                    let codec_id = track_codec_id.clone().unwrap_or_default();
                    match track_type {
                        1 => {
                            tracks.push(TrackMeta {
                                number: track_number,
                                kind: StreamKind::Video,
                            });
                            media_info.video_tracks.push(VideoTrackInfo {
                                id: track_number as u32,
                                codec: video_codec_for(&codec_id),
                                width: pixel_width,
                                height: pixel_height,
                                frame_rate: None,
                            });
                        }
                        2 => {
                            tracks.push(TrackMeta {
                                number: track_number,
                                kind: StreamKind::Audio,
                            });
                            media_info.audio_tracks.push(AudioTrackInfo {
                                id: track_number as u32,
                                codec: audio_codec_for(&codec_id),
                                sample_rate: if sample_rate > 0 { sample_rate } else { 48_000 },
                                channels: if channels > 0 { channels } else { 2 },
                            });
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if media_info.video_tracks.is_empty() && media_info.audio_tracks.is_empty() {
            return Err(MediaError::StreamNotFound("no video or audio track in Matroska/WebM".to_string()));
        }

        let duration_ms = duration_scaled.map(|d| (d * timecode_scale_ns as f64 / 1_000_000.0) as u64);
        media_info.duration = duration_ms.map(std::time::Duration::from_millis);

        let mut container = Self {
            bytes,
            tracks,
            timecode_scale_ns,
            pending: VecDeque::new(),
            cursor_ms: 0,
            duration_ms,
        };
        container.refill_from(0)?;

        Ok((container, media_info))
    }

    fn read_packet(&mut self) -> Result<Option<Packet>, MediaError> {
        Ok(self.pending.pop_front())
    }

    fn seek(&mut self, target_ms: u64, backward: bool) -> Result<(), MediaError> {
        let _ = backward;
        self.cursor_ms = target_ms;
        self.refill_from(target_ms)
    }

    fn duration_ms(&self) -> Option<u64> {
        self.duration_ms
    }
}
