//! MP4/MOV container reader, backed by the `mp4` crate.
//!
//! `mp4::Mp4Reader` is sample-indexed rather than a packet stream, so this
//! reader keeps a per-track cursor (`next_sample`) and, on every
//! `read_packet`, serves whichever active track's next sample has the
//! lower start time — this is what recovers demuxer-order interleaving
//! from a format that stores video and audio in separate sample tables.

use crate::container::ContainerDemuxer;
use mediacore_shared_types::{
    AACProfile, AudioCodec, AudioTrackInfo, H264Level, H264Profile, MediaError, MediaInfo,
    MediaTimestamp, Packet, StreamKind, VideoCodec, VideoTrackInfo,
};
use std::io::Cursor;
use std::time::Duration;

type Reader = mp4::Mp4Reader<Cursor<Vec<u8>>>;

struct TrackCursor {
    track_id: u32,
    timescale: u32,
    next_sample: u32,
    sample_count: u32,
}

pub(crate) struct Mp4Container {
    reader: Reader,
    video: Option<TrackCursor>,
    audio: Option<TrackCursor>,
    duration_ms: Option<u64>,
}

fn video_codec_for(fourcc: &str) -> VideoCodec {
    match fourcc {
        "hev1" | "hvc1" => VideoCodec::H265 {
            profile: mediacore_shared_types::H265Profile::Main,
            tier: mediacore_shared_types::H265Tier::Main,
            level: mediacore_shared_types::H265Level::Level4_0,
        },
        "av01" => VideoCodec::AV1 {
            profile: mediacore_shared_types::AV1Profile::Main,
            level: mediacore_shared_types::AV1Level::Level4_0,
        },
        // avc1/avc3 and any other box type we don't special-case: the
        // overwhelming majority of MP4 video is H.264.
        _ => VideoCodec::H264 {
            profile: H264Profile::High,
            level: H264Level::Level4_1,
            hardware_accel: false,
        },
    }
}

fn audio_codec_for(fourcc: &str, sample_rate: u32, channels: u8) -> AudioCodec {
    match fourcc {
        "opus" => AudioCodec::Opus {
            sample_rate,
            channels,
            application: mediacore_shared_types::OpusApplication::Audio,
        },
        "mp4a" | _ => AudioCodec::AAC {
            profile: AACProfile::LC,
            sample_rate,
            channels,
        },
    }
}

impl ContainerDemuxer for Mp4Container {
    fn open(bytes: Vec<u8>) -> Result<(Self, MediaInfo), MediaError> {
        let size = bytes.len() as u64;
        let reader = mp4::Mp4Reader::read_header(Cursor::new(bytes), size)
            .map_err(|e| MediaError::InvalidFormat(format!("mp4: {e}")))?;

        let duration_ms = {
            let d = reader.duration();
            if d > Duration::ZERO {
                Some(d.as_millis() as u64)
            } else {
                None
            }
        };

        let mut video = None;
        let mut audio = None;
        let mut media_info = MediaInfo {
            duration: duration_ms.map(Duration::from_millis),
            ..Default::default()
        };

        for (&track_id, track) in reader.tracks().iter() {
            match track.track_type() {
                Ok(mp4::TrackType::Video) => {
                    if video.is_none() {
                        let codec = video_codec_for(&track.box_type().unwrap_or_default().to_string());
                        media_info.video_tracks.push(VideoTrackInfo {
                            id: track_id,
                            codec,
                            width: track.width() as u32,
                            height: track.height() as u32,
                            frame_rate: track.frame_rate().ok().map(|r| r as f64),
                        });
                        video = Some(TrackCursor {
                            track_id,
                            timescale: track.timescale(),
                            next_sample: 1,
                            sample_count: track.sample_count(),
                        });
                    }
                }
                Ok(mp4::TrackType::Audio) => {
                    if audio.is_none() {
                        let sample_rate = track.sample_freq_index().map(|f| f.freq()).unwrap_or(44_100);
                        let channels = track.channel_config().map(|c| c as u8).unwrap_or(2);
                        let codec = audio_codec_for(
                            &track.box_type().unwrap_or_default().to_string(),
                            sample_rate,
                            channels,
                        );
                        media_info.audio_tracks.push(AudioTrackInfo {
                            id: track_id,
                            codec,
                            sample_rate,
                            channels,
                        });
                        audio = Some(TrackCursor {
                            track_id,
                            timescale: track.timescale(),
                            next_sample: 1,
                            sample_count: track.sample_count(),
                        });
                    }
                }
                _ => {}
            }
        }

        if video.is_none() && audio.is_none() {
            return Err(MediaError::StreamNotFound("no video or audio track in MP4".to_string()));
        }

        Ok((
            Self {
                reader,
                video,
                audio,
                duration_ms,
            },
            media_info,
        ))
    }

    fn read_packet(&mut self) -> Result<Option<Packet>, MediaError> {
        let video_next_ms = self.video.as_ref().and_then(|c| self.peek_start_ms(c));
        let audio_next_ms = self.audio.as_ref().and_then(|c| self.peek_start_ms(c));

        let take_video = match (video_next_ms, audio_next_ms) {
            (Some(v), Some(a)) => v <= a,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => return Ok(None),
        };

        if take_video {
            self.read_track(StreamKind::Video)
        } else {
            self.read_track(StreamKind::Audio)
        }
    }

    fn seek(&mut self, target_ms: u64, backward: bool) -> Result<(), MediaError> {
        for cursor in [self.video.as_mut(), self.audio.as_mut()].into_iter().flatten() {
            let target_units = target_ms * cursor.timescale as u64 / 1000;
            let mut candidate = 1u32;
            for sample_id in 1..=cursor.sample_count {
                if let Ok(Some(sample)) = self.reader.read_sample(cursor.track_id, sample_id) {
                    if backward {
                        if sample.start_time <= target_units && sample.is_sync {
                            candidate = sample_id;
                        }
                        if sample.start_time > target_units {
                            break;
                        }
                    } else if sample.start_time >= target_units {
                        candidate = sample_id;
                        break;
                    }
                }
            }
            cursor.next_sample = candidate;
        }
        Ok(())
    }

    fn duration_ms(&self) -> Option<u64> {
        self.duration_ms
    }
}

impl Mp4Container {
    fn peek_start_ms(&self, cursor: &TrackCursor) -> Option<u64> {
        if cursor.next_sample > cursor.sample_count {
            return None;
        }
        self.reader
            .read_sample(cursor.track_id, cursor.next_sample)
            .ok()
            .flatten()
            .map(|s| s.start_time * 1000 / cursor.timescale.max(1) as u64)
    }

    fn read_track(&mut self, kind: StreamKind) -> Result<Option<Packet>, MediaError> {
        let cursor = match kind {
            StreamKind::Video => self.video.as_mut(),
            StreamKind::Audio => self.audio.as_mut(),
        }
        .expect("caller only selects a track that is Some");

        if cursor.next_sample > cursor.sample_count {
            return Ok(None);
        }

        let sample = self
            .reader
            .read_sample(cursor.track_id, cursor.next_sample)
            .map_err(|e| MediaError::DemuxError(format!("mp4 read_sample: {e}")))?;

        let Some(sample) = sample else {
            return Ok(None);
        };

        let timescale = cursor.timescale.max(1);
        let timestamp = MediaTimestamp::new(sample.start_time as i64, sample.start_time as i64, (1, timescale));
        let packet = Packet::new(kind, sample.bytes.to_vec(), timestamp, sample.is_sync);
        cursor.next_sample += 1;
        Ok(Some(packet))
    }
}
