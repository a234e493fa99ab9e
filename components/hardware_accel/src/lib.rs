//! # hardware_accel
//!
//! Owns the GPU device handle and surface pool shared by the hardware
//! video decoder and the hardware renderer (spec §4.3).
//!
//! - **Linux**: VA-API ([`vaapi`], probed)
//! - **Windows**: DXVA (stub, reports unavailable)
//! - **macOS**: VideoToolbox (stub, reports unavailable)
//!
//! # Architecture
//!
//! [`HwDeviceContext::initialize`] probes the platform backend, checks the
//! requested codec against its reported capabilities, and sizes a
//! [`pool::SurfacePool`] using the formula from spec §4.3/§9:
//! `initial_pool_size = max(dpb_for_codec + render_buffering + margin, 12)`.
//! Surfaces are handed out as refcounted
//! [`mediacore_shared_types::HwSurfaceHandle`]s; a surface returns to the
//! pool only when every clone of its handle (queue slot, in-flight render)
//! has dropped.
//!
//! The context itself is meant to be wrapped in `Arc` and shared between
//! the decoder and the renderer; it is torn down only once both sides have
//! released their clone.
//!
//! # Examples
//!
//! ```no_run
//! use mediacore_hardware_accel::HwDeviceContext;
//! use mediacore_shared_types::{VideoCodec, H264Profile, H264Level};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let codec = VideoCodec::H264 {
//!     profile: H264Profile::High,
//!     level: H264Level::Level4_1,
//!     hardware_accel: true,
//! };
//!
//! let ctx = HwDeviceContext::initialize(&codec, 3840, 2160)?;
//! assert!(ctx.pool_size() >= 12);
//!
//! let surface = ctx.acquire_surface()?;
//! drop(surface); // returns to the pool
//! # Ok(())
//! # }
//! ```
//!
//! # Graceful Degradation
//!
//! ```no_run
//! use mediacore_hardware_accel::{HwDeviceContext, HardwareError};
//! use mediacore_shared_types::VideoCodec;
//!
//! # fn run(codec: VideoCodec) {
//! match HwDeviceContext::initialize(&codec, 1920, 1080) {
//!     Ok(ctx) => {
//!         // Use the hardware decode path.
//!         let _ = ctx.pool_size();
//!     }
//!     Err(HardwareError::NotAvailable) | Err(HardwareError::UnsupportedCodec) => {
//!         // Fall back to a software decoder for this codec.
//!     }
//!     Err(e) => eprintln!("hardware context error: {e}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]

mod capabilities;
mod context;
mod error;
mod pool;

#[cfg(target_os = "linux")]
mod vaapi;

#[cfg(target_os = "windows")]
mod dxva;

#[cfg(target_os = "macos")]
mod videotoolbox;

pub use capabilities::HardwareCapabilities;
pub use context::{HwDeviceContext, RawDeviceHandle};
pub use error::{HardwareError, HardwareResult};
pub use pool::{dpb_for_codec, initial_pool_size, SurfacePool, DEFAULT_MARGIN, DEFAULT_RENDER_BUFFERING, MIN_POOL_SIZE};
