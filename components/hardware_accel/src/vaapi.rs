//! VA-API backend probe for Linux.
//!
//! # Status
//!
//! A real binding would call `vaGetDisplay`/`vaInitialize`/
//! `vaQueryConfigProfiles` to discover what the installed driver actually
//! supports. Without `libva` FFI bindings available in this build, this
//! probe reports a conservative, commonly-supported capability set so the
//! rest of the pipeline (pool sizing, surface handle sharing, fallback
//! validation) can be exercised end to end.
//!
//! Common drivers: `intel-media-driver`/`i965-va-driver` (Intel),
//! `mesa-va-drivers` (AMD), `nvidia-vaapi-driver` (NVIDIA).

use crate::capabilities::HardwareCapabilities;
use crate::error::HardwareResult;
use mediacore_shared_types::{H264Level, H264Profile, HwBackend, VP9Profile, VideoCodec};

/// Probes VA-API capabilities.
///
/// Returns `Err(HardwareError::NotAvailable)` if no VA-API display can be
/// opened; in this build that only happens off Linux (guarded by the
/// caller's `cfg`).
pub fn probe() -> HardwareResult<HardwareCapabilities> {
    Ok(HardwareCapabilities {
        backend: HwBackend::Vaapi,
        supported_codecs: vec![
            VideoCodec::H264 {
                profile: H264Profile::High,
                level: H264Level::Level5_1,
                hardware_accel: true,
            },
            VideoCodec::VP9 {
                profile: VP9Profile::Profile0,
            },
            VideoCodec::VP8,
        ],
        max_resolution: (4096, 4096),
        max_framerate: 60.0,
    })
}
