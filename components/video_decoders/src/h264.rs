//! H.264/AVC video decoder implementation
//!
//! This module provides H.264 decoding using the openh264 library.

use mediacore_shared_types::{
    DecodeStatus, Decoder, MediaError, Packet, PixelFormat, VideoFrame,
};
use openh264::decoder::Decoder as OpenH264Decoder;
use openh264::formats::YUVSource;
use std::collections::VecDeque;

/// H.264 video decoder
///
/// Decodes H.264/AVC video packets into raw video frames using OpenH264.
/// OpenH264 decodes synchronously on `send_data`, so every `send_packet`
/// either yields exactly one frame (queued for `receive_frame`) or none,
/// which already matches the push/pull protocol without extra buffering
/// beyond a one-slot queue.
///
/// # Examples
///
/// ```no_run
/// use mediacore_video_decoders::H264Decoder;
/// use mediacore_shared_types::Decoder;
///
/// let mut decoder = H264Decoder::new().unwrap();
/// ```
pub struct H264Decoder {
    decoder: OpenH264Decoder,
    pending: VecDeque<VideoFrame>,
    sequence: u64,
}

impl H264Decoder {
    /// Creates a new H.264 decoder instance
    ///
    /// # Errors
    ///
    /// Returns `MediaError::DecoderInitFailed` if OpenH264 fails to
    /// initialize.
    pub fn new() -> Result<Self, MediaError> {
        let decoder = OpenH264Decoder::new()
            .map_err(|e| MediaError::DecoderInitFailed(format!("openh264: {:?}", e)))?;

        Ok(Self {
            decoder,
            pending: VecDeque::new(),
            sequence: 0,
        })
    }
}

impl Decoder<VideoFrame> for H264Decoder {
    fn send_packet(&mut self, packet: &Packet) -> Result<(), MediaError> {
        if packet.data.is_empty() {
            return Err(MediaError::SendFailed("empty H.264 packet".to_string()));
        }

        let yuv_opt = self
            .decoder
            .decode(&packet.data)
            .map_err(|e| MediaError::DecoderError(format!("H.264 decode error: {:?}", e)))?;

        if let Some(yuv_frame) = yuv_opt {
            let (width, height) = yuv_frame.dimensions();
            let y_plane = yuv_frame.y();
            let u_plane = yuv_frame.u();
            let v_plane = yuv_frame.v();

            let y_size = width * height;
            let uv_size = width * height / 4;

            let mut data = Vec::with_capacity(y_size + uv_size * 2);
            data.extend_from_slice(&y_plane[..y_size]);
            data.extend_from_slice(&u_plane[..uv_size]);
            data.extend_from_slice(&v_plane[..uv_size]);

            let pts_ms = packet.timestamp.to_milliseconds();
            let mut frame = VideoFrame::new(width as u32, height as u32, PixelFormat::YUV420, data, pts_ms);
            frame.metadata.is_keyframe = packet.is_keyframe;
            frame.metadata.dts = Some(packet.timestamp.dts);
            frame.metadata.sequence = Some(self.sequence);
            self.sequence += 1;

            self.pending.push_back(frame);
        }

        Ok(())
    }

    fn receive_frame(&mut self) -> Result<(Option<VideoFrame>, DecodeStatus), MediaError> {
        match self.pending.pop_front() {
            Some(frame) => {
                let status = if self.pending.is_empty() {
                    DecodeStatus::NeedMoreInput
                } else {
                    DecodeStatus::FrameReady
                };
                Ok((Some(frame), status))
            }
            None => Ok((None, DecodeStatus::NeedMoreInput)),
        }
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
