//! VideoToolbox backend probe for macOS (stub).
//!
//! # Status: NOT YET IMPLEMENTED
//!
//! A full implementation needs `VTDecompressionSession`/`CMSampleBuffer`
//! bindings via the VideoToolbox and CoreMedia frameworks; until those are
//! wired in, probing always reports the backend unavailable so the caller
//! falls back to software decode.
//!
//! Supported codecs once implemented: H.264, H.265 (10.13+), VP9 (11+),
//! and AV1 on Apple Silicon.

use crate::capabilities::HardwareCapabilities;
use crate::error::{HardwareError, HardwareResult};

/// Probes VideoToolbox capabilities (stub).
///
/// Always returns `Err(HardwareError::NotAvailable)`.
pub fn probe() -> HardwareResult<HardwareCapabilities> {
    Err(HardwareError::NotAvailable)
}
