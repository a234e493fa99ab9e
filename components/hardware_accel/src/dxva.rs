//! DXVA backend probe for Windows (stub).
//!
//! # Status: NOT YET IMPLEMENTED
//!
//! A full implementation needs an `ID3D11Device`/`ID3D11VideoDevice` pair
//! and FFI bindings to the Windows COM interfaces; until those bindings
//! are wired in, probing always reports the backend unavailable so the
//! caller falls back to software decode.
//!
//! ## Architecture (future)
//! ```text
//! DXVADecoder
//! ├── ID3D11Device (Direct3D device)
//! ├── ID3D11VideoDevice (Video device)
//! ├── ID3D11VideoDecoder (Hardware decoder)
//! ├── ID3D11VideoContext (Decode context)
//! └── ID3D11VideoDecoderOutputView (Output surfaces)
//! ```
//!
//! Supported codecs once implemented: H.264, H.265, VP9, and AV1 on newer
//! hardware.

use crate::capabilities::HardwareCapabilities;
use crate::error::{HardwareError, HardwareResult};

/// Probes DXVA capabilities (stub).
///
/// Always returns `Err(HardwareError::NotAvailable)`.
pub fn probe() -> HardwareResult<HardwareCapabilities> {
    Err(HardwareError::NotAvailable)
}
