//! Hardware capabilities reporting

use mediacore_shared_types::{HwBackend, VideoCodec};

/// Hardware acceleration capabilities
///
/// Describes the capabilities of the available hardware acceleration
/// backend, including which codecs it can decode and the resolution/frame
/// rate it has been validated against.
///
/// # Examples
///
/// ```
/// use mediacore_hardware_accel::HardwareCapabilities;
/// use mediacore_shared_types::{HwBackend, VideoCodec, H264Profile, H264Level};
///
/// let caps = HardwareCapabilities {
///     backend: HwBackend::Vaapi,
///     supported_codecs: vec![
///         VideoCodec::H264 {
///             profile: H264Profile::High,
///             level: H264Level::Level4_1,
///             hardware_accel: true,
///         },
///     ],
///     max_resolution: (3840, 2160), // 4K
///     max_framerate: 60.0,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct HardwareCapabilities {
    /// The backend these capabilities describe.
    pub backend: HwBackend,
    /// List of video codecs supported by hardware
    pub supported_codecs: Vec<VideoCodec>,

    /// Maximum resolution supported (width, height)
    pub max_resolution: (u32, u32),

    /// Maximum frame rate supported (frames per second)
    pub max_framerate: f32,
}

impl HardwareCapabilities {
    /// Whether `codec` (matched by variant, ignoring profile/level) is
    /// within this backend's supported set.
    pub fn supports(&self, codec: &VideoCodec) -> bool {
        self.supported_codecs.iter().any(|supported| {
            std::mem::discriminant(supported) == std::mem::discriminant(codec)
        })
    }
}

impl Default for HardwareCapabilities {
    fn default() -> Self {
        Self {
            backend: HwBackend::None,
            supported_codecs: Vec::new(),
            max_resolution: (0, 0),
            max_framerate: 0.0,
        }
    }
}
