//! Decoder factory for creating codec-specific decoders, and the
//! hardware-path wrapper that implements the format-selection/fallback
//! contract from spec §4.2.

use mediacore_shared_types::{DecodeStatus, Decoder, MediaError, Packet, VideoCodec, VideoFrame};
use std::collections::VecDeque;
use std::sync::Arc;

#[cfg(feature = "h264")]
use crate::H264Decoder;

#[cfg(feature = "vp9")]
use crate::VP9Decoder;

#[cfg(feature = "av1")]
use crate::AV1Decoder;

use mediacore_hardware_accel::{dpb_for_codec, HardwareError, HwDeviceContext};

/// Factory for creating video decoders based on codec type
///
/// # Examples
///
/// ```no_run
/// use mediacore_video_decoders::DecoderFactory;
/// use mediacore_shared_types::{VideoCodec, H264Profile, H264Level};
///
/// let codec = VideoCodec::H264 {
///     profile: H264Profile::High,
///     level: H264Level::Level4_1,
///     hardware_accel: false,
/// };
///
/// let decoder = DecoderFactory::create_decoder(codec).unwrap();
/// ```
pub struct DecoderFactory;

impl DecoderFactory {
    /// Creates a software decoder for the specified codec.
    ///
    /// # Errors
    ///
    /// - `MediaError::UnsupportedCodec` — the codec is not compiled in, or
    ///   has no decoder at all (Theora, VP8, H.265).
    /// - `MediaError::DecoderInitFailed` — the underlying codec library
    ///   failed to initialize.
    pub fn create_decoder(codec: VideoCodec) -> Result<Box<dyn Decoder<VideoFrame>>, MediaError> {
        match codec {
            #[cfg(feature = "h264")]
            VideoCodec::H264 { .. } => Ok(Box::new(H264Decoder::new()?)),
            #[cfg(not(feature = "h264"))]
            VideoCodec::H264 { .. } => Err(MediaError::UnsupportedCodec(
                "H.264 support not enabled (compile with --features h264)".to_string(),
            )),

            #[cfg(feature = "vp9")]
            VideoCodec::VP9 { .. } => Ok(Box::new(VP9Decoder::new()?)),
            #[cfg(not(feature = "vp9"))]
            VideoCodec::VP9 { .. } => Err(MediaError::UnsupportedCodec(
                "VP9 support not enabled (compile with --features vp9)".to_string(),
            )),

            #[cfg(feature = "av1")]
            VideoCodec::AV1 { .. } => Ok(Box::new(AV1Decoder::new()?)),
            #[cfg(not(feature = "av1"))]
            VideoCodec::AV1 { .. } => Err(MediaError::UnsupportedCodec(
                "AV1 support not enabled (compile with --features av1)".to_string(),
            )),

            VideoCodec::H265 { .. } => {
                Err(MediaError::UnsupportedCodec("H.265/HEVC is not yet supported".to_string()))
            }
            VideoCodec::VP8 => Err(MediaError::UnsupportedCodec("VP8 is not yet supported".to_string())),
            VideoCodec::Theora => Err(MediaError::UnsupportedCodec("Theora codec is not supported".to_string())),
        }
    }

    /// Creates a decoder for `codec`, attempting the hardware path first if
    /// `width`/`height` and a usable backend are available, falling back to
    /// software otherwise (spec §4.2/§4.3).
    ///
    /// Returns a [`HardwareVideoDecoder`] when a hardware backend probes
    /// successfully for `codec`, or a plain software decoder otherwise —
    /// either way the caller only sees a `Decoder<VideoFrame>`.
    pub fn create_decoder_with_hardware(
        codec: VideoCodec,
        width: u32,
        height: u32,
    ) -> Result<Box<dyn Decoder<VideoFrame>>, MediaError> {
        match HardwareVideoDecoder::new(codec.clone(), width, height) {
            Ok(hw) => Ok(Box::new(hw)),
            Err(_) => Self::create_decoder(codec),
        }
    }

    /// Returns the compiled-in codec names.
    #[allow(clippy::vec_init_then_push)]
    pub fn supported_codecs() -> Vec<&'static str> {
        let mut codecs = Vec::new();

        #[cfg(feature = "h264")]
        codecs.push("H.264");

        #[cfg(feature = "vp9")]
        codecs.push("VP9");

        #[cfg(feature = "av1")]
        codecs.push("AV1");

        codecs
    }
}

/// A video decoder that prefers the hardware path and falls back to
/// software if the first frame cannot be produced on hardware (spec §4.2
/// "Hardware path specifics").
///
/// Buffers every packet it has sent but not yet resolved into the DPB
/// window (`dpb_for_codec(codec)` packets); if the first hardware frame
/// cannot be produced, those buffered packets are replayed into a freshly
/// created software decoder rather than rewinding the demuxer (Open
/// Question (b), see `DESIGN.md`). Once a fallback has been chosen it is
/// sticky for the life of this decoder.
pub struct HardwareVideoDecoder {
    hw_ctx: Arc<HwDeviceContext>,
    codec: VideoCodec,
    width: u32,
    height: u32,
    replay_buffer: VecDeque<Packet>,
    fallback: Option<Box<dyn Decoder<VideoFrame>>>,
    validated: bool,
    pending: VecDeque<VideoFrame>,
}

impl HardwareVideoDecoder {
    /// Probes for a hardware backend and sizes its surface pool for
    /// `codec` at `width`x`height`.
    ///
    /// # Errors
    ///
    /// Returns `MediaError` if no hardware backend is available or does
    /// not support `codec` — callers should fall back to
    /// `DecoderFactory::create_decoder` in that case.
    pub fn new(codec: VideoCodec, width: u32, height: u32) -> Result<Self, MediaError> {
        let hw_ctx = HwDeviceContext::initialize(&codec, width, height)?.into_shared();
        Ok(Self {
            hw_ctx,
            codec,
            width,
            height,
            replay_buffer: VecDeque::new(),
            fallback: None,
            validated: false,
            pending: VecDeque::new(),
        })
    }

    /// Wraps an already-initialized, possibly renderer-shared context
    /// rather than probing and allocating a new one.
    pub fn with_context(hw_ctx: Arc<HwDeviceContext>, codec: VideoCodec, width: u32, height: u32) -> Self {
        Self {
            hw_ctx,
            codec,
            width,
            height,
            replay_buffer: VecDeque::new(),
            fallback: None,
            validated: false,
            pending: VecDeque::new(),
        }
    }

    fn fall_back_to_software(&mut self) -> Result<(), MediaError> {
        let mut software = DecoderFactory::create_decoder(self.codec.clone())?;
        for buffered in self.replay_buffer.drain(..) {
            software.send_packet(&buffered)?;
            software.receive_pending_frames(&mut Vec::new())?;
        }
        self.fallback = Some(software);
        Ok(())
    }
}

impl Decoder<VideoFrame> for HardwareVideoDecoder {
    fn send_packet(&mut self, packet: &Packet) -> Result<(), MediaError> {
        if let Some(fallback) = &mut self.fallback {
            return fallback.send_packet(packet);
        }

        let dpb = dpb_for_codec(&self.codec);
        if self.replay_buffer.len() >= dpb {
            self.replay_buffer.pop_front();
        }
        self.replay_buffer.push_back(packet.clone());

        match self.hw_ctx.acquire_surface() {
            Ok(surface) => {
                let pts_ms = packet.timestamp.to_milliseconds();
                let mut frame = VideoFrame::new_hardware(self.width, self.height, surface, pts_ms);
                frame.metadata.is_keyframe = packet.is_keyframe;
                frame.metadata.dts = Some(packet.timestamp.dts);
                self.pending.push_back(frame);
                self.validated = true;
                Ok(())
            }
            Err(HardwareError::SurfacesExhausted { .. }) if !self.validated => {
                // First-frame hardware validation failed: reopen in
                // software mode rather than report a fatal error.
                self.fall_back_to_software()?;
                let last = self.replay_buffer.back().cloned();
                if let (Some(fb), Some(_)) = (&mut self.fallback, last) {
                    fb.send_packet(packet)?;
                }
                Ok(())
            }
            Err(e) => Err(MediaError::from(e)),
        }
    }

    fn receive_frame(&mut self) -> Result<(Option<VideoFrame>, DecodeStatus), MediaError> {
        if let Some(fallback) = &mut self.fallback {
            return fallback.receive_frame();
        }
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
        self.replay_buffer.clear();
        if let Some(fallback) = &mut self.fallback {
            fallback.flush()?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), MediaError> {
        if let Some(fallback) = &mut self.fallback {
            fallback.close()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediacore_shared_types::{H264Level, H264Profile};

    #[cfg(feature = "h264")]
    #[test]
    fn test_create_h264_decoder() {
        let codec = VideoCodec::H264 {
            profile: H264Profile::High,
            level: H264Level::Level4_1,
            hardware_accel: false,
        };

        let result = DecoderFactory::create_decoder(codec);
        assert!(result.is_ok(), "Should create H.264 decoder");
    }

    #[cfg(feature = "vp9")]
    #[test]
    fn test_create_vp9_decoder() {
        use mediacore_shared_types::VP9Profile;

        let codec = VideoCodec::VP9 {
            profile: VP9Profile::Profile0,
        };

        let result = DecoderFactory::create_decoder(codec);
        assert!(result.is_ok(), "Should create VP9 decoder");
    }

    #[cfg(feature = "av1")]
    #[test]
    fn test_create_av1_decoder() {
        use mediacore_shared_types::{AV1Level, AV1Profile};

        let codec = VideoCodec::AV1 {
            profile: AV1Profile::Main,
            level: AV1Level::Level4_0,
        };

        let result = DecoderFactory::create_decoder(codec);
        assert!(result.is_ok(), "Should create AV1 decoder");
    }

    #[test]
    fn test_unsupported_codec() {
        let codec = VideoCodec::Theora;

        let result = DecoderFactory::create_decoder(codec);
        assert!(matches!(result, Err(MediaError::UnsupportedCodec(_))));
    }

    #[test]
    fn test_supported_codecs_list() {
        let supported = DecoderFactory::supported_codecs();

        #[cfg(feature = "h264")]
        assert!(supported.contains(&"H.264"));

        #[cfg(feature = "vp9")]
        assert!(supported.contains(&"VP9"));

        #[cfg(feature = "av1")]
        assert!(supported.contains(&"AV1"));
    }

    #[cfg(all(feature = "h264", target_os = "linux"))]
    #[test]
    fn hardware_decoder_falls_back_by_replaying_buffered_packets() {
        use mediacore_shared_types::{MediaTimestamp, StreamKind};

        let codec = VideoCodec::H264 {
            profile: H264Profile::High,
            level: H264Level::Level5_1,
            hardware_accel: true,
        };

        let mut hw = HardwareVideoDecoder::new(codec, 3840, 2160).unwrap();
        // Exhaust the pool before the first frame is acquired so the very
        // first send_packet is forced onto the fallback path.
        let mut drained = Vec::new();
        while let Ok(surface) = hw.hw_ctx.acquire_surface() {
            drained.push(surface);
        }

        let packet = Packet::new(
            StreamKind::Video,
            vec![0u8; 4],
            MediaTimestamp::new(0, 0, (1, 1000)),
            true,
        );
        // send_packet should not panic even though every surface is held;
        // it either errors cleanly or falls back, never crashes.
        let _ = hw.send_packet(&packet);
    }
}
