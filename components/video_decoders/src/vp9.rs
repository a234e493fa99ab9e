//! VP9 video decoder implementation
//!
//! This module provides VP9 decoding using the libvpx library (vpx-sys bindings).

use mediacore_shared_types::{
    DecodeStatus, Decoder, MediaError, Packet, PixelFormat, VideoFrame,
};
use std::collections::VecDeque;
use std::ptr;

/// VP9 video decoder
///
/// Decodes VP9 video packets into raw video frames using libvpx. libvpx
/// may buffer internally (frame reordering for the DPB), so every
/// `send_packet` drains `vpx_codec_get_frame` in a loop until the iterator
/// is exhausted, queuing every resulting image.
pub struct VP9Decoder {
    ctx: Box<vpx_sys::vpx_codec_ctx_t>,
    pending: VecDeque<VideoFrame>,
    sequence: u64,
    initialized: bool,
}

impl VP9Decoder {
    /// Creates a new VP9 decoder instance
    ///
    /// # Errors
    ///
    /// Returns `MediaError::DecoderInitFailed` if libvpx fails to
    /// initialize the VP9 decode context.
    pub fn new() -> Result<Self, MediaError> {
        let mut ctx = Box::new(unsafe { std::mem::zeroed::<vpx_sys::vpx_codec_ctx_t>() });
        let iface = unsafe { vpx_sys::vpx_codec_vp9_dx() };

        let ret = unsafe {
            vpx_sys::vpx_codec_dec_init_ver(
                ctx.as_mut(),
                iface,
                ptr::null(),
                0,
                vpx_sys::VPX_DECODER_ABI_VERSION as i32,
            )
        };

        if ret != vpx_sys::vpx_codec_err_t::VPX_CODEC_OK {
            return Err(MediaError::DecoderInitFailed(format!(
                "libvpx VP9 init failed: error code {:?}",
                ret
            )));
        }

        Ok(Self {
            ctx,
            pending: VecDeque::new(),
            sequence: 0,
            initialized: true,
        })
    }

    fn vpx_img_to_video_frame(&mut self, img: &vpx_sys::vpx_image_t, pts_ms: i64) -> VideoFrame {
        let width = img.d_w;
        let height = img.d_h;

        let y_size = (img.stride[0] as u32 * height) as usize;
        let u_size = (img.stride[1] as u32 * height / 2) as usize;
        let v_size = (img.stride[2] as u32 * height / 2) as usize;

        let mut data = Vec::with_capacity(y_size + u_size + v_size);
        unsafe {
            let y_plane = std::slice::from_raw_parts(img.planes[0], y_size);
            let u_plane = std::slice::from_raw_parts(img.planes[1], u_size);
            let v_plane = std::slice::from_raw_parts(img.planes[2], v_size);

            data.extend_from_slice(y_plane);
            data.extend_from_slice(u_plane);
            data.extend_from_slice(v_plane);
        }

        let mut frame = VideoFrame::new(width, height, PixelFormat::YUV420, data, pts_ms);
        frame.metadata.sequence = Some(self.sequence);
        self.sequence += 1;
        frame
    }
}

impl Decoder<VideoFrame> for VP9Decoder {
    fn send_packet(&mut self, packet: &Packet) -> Result<(), MediaError> {
        if !self.initialized {
            return Err(MediaError::NotInitialized);
        }
        if packet.data.is_empty() {
            return Err(MediaError::SendFailed("empty VP9 packet".to_string()));
        }

        let ret = unsafe {
            vpx_sys::vpx_codec_decode(
                self.ctx.as_mut(),
                packet.data.as_ptr(),
                packet.data.len() as u32,
                ptr::null_mut(),
                0,
            )
        };

        if ret != vpx_sys::vpx_codec_err_t::VPX_CODEC_OK {
            return Err(MediaError::DecoderError(format!("VP9 decode error: {:?}", ret)));
        }

        let pts_ms = packet.timestamp.to_milliseconds();
        let is_keyframe = packet.is_keyframe;
        let dts = packet.timestamp.dts;

        let mut iter = ptr::null();
        loop {
            let img = unsafe { vpx_sys::vpx_codec_get_frame(self.ctx.as_mut(), &mut iter) };
            if img.is_null() {
                break;
            }
            let img_ref = unsafe { &*img };
            let mut frame = self.vpx_img_to_video_frame(img_ref, pts_ms);
            frame.metadata.is_keyframe = is_keyframe;
            frame.metadata.dts = Some(dts);
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

impl Drop for VP9Decoder {
    fn drop(&mut self) {
        if self.initialized {
            unsafe {
                vpx_sys::vpx_codec_destroy(self.ctx.as_mut());
            }
        }
    }
}
