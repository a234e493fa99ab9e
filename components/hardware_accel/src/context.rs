//! GPU device handle and surface pool, shared by the hardware decoder and
//! the hardware renderer (spec §4.3).

use crate::capabilities::HardwareCapabilities;
use crate::error::{HardwareError, HardwareResult};
use crate::pool::{initial_pool_size, SurfacePool, DEFAULT_MARGIN, DEFAULT_RENDER_BUFFERING};
use mediacore_shared_types::{HwBackend, HwSurfaceHandle, VideoCodec};
use std::sync::Arc;

#[cfg(target_os = "linux")]
use crate::vaapi;

#[cfg(target_os = "windows")]
use crate::dxva;

#[cfg(target_os = "macos")]
use crate::videotoolbox;

/// An opaque handle standing in for the platform device object
/// (`VADisplay`, `ID3D11Device`, or a VideoToolbox session). Real FFI
/// bindings would replace this with the platform type; callers only need
/// it to prove the device is alive and to pass to the renderer for
/// context sharing.
pub type RawDeviceHandle = usize;

/// Owns the GPU device handle and its surface pool for one playback
/// session.
///
/// Created once per session by [`HwDeviceContext::initialize`] and shared
/// (via `Arc`) between the hardware decoder and the hardware renderer; the
/// device and pool are torn down only once both sides have dropped their
/// `Arc` (spec §4.3: "tracks its own refcount; released only after both
/// decoder and renderer disclaim it").
pub struct HwDeviceContext {
    backend: HwBackend,
    capabilities: HardwareCapabilities,
    pool: SurfacePool,
    device_handle: RawDeviceHandle,
}

impl HwDeviceContext {
    /// Detects the platform's hardware backend and probes its
    /// capabilities, without sizing a surface pool yet.
    ///
    /// Returns `Err(HardwareError::NotAvailable)` if no backend is usable
    /// on this platform (the caller should fall back to software decode).
    pub fn probe() -> HardwareResult<HardwareCapabilities> {
        #[cfg(target_os = "linux")]
        {
            vaapi::probe()
        }

        #[cfg(target_os = "windows")]
        {
            dxva::probe()
        }

        #[cfg(target_os = "macos")]
        {
            videotoolbox::probe()
        }

        #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
        {
            Err(HardwareError::NotAvailable)
        }
    }

    /// `Initialize(backend, codec_id, w, h)` (spec §4.3): allocates the
    /// device and configures the surface pool with
    /// `initial_pool_size = max(dpb_for_codec + render_buffering + margin, 12)`.
    ///
    /// # Errors
    ///
    /// Returns `HardwareError::NotAvailable` if the backend cannot be
    /// probed on this platform, or `HardwareError::UnsupportedCodec` if the
    /// backend is available but does not list `codec` among its supported
    /// codecs.
    pub fn initialize(codec: &VideoCodec, _width: u32, _height: u32) -> HardwareResult<Self> {
        let capabilities = Self::probe()?;
        if !capabilities.supports(codec) {
            return Err(HardwareError::UnsupportedCodec);
        }

        let pool_size = initial_pool_size(codec, DEFAULT_RENDER_BUFFERING, DEFAULT_MARGIN);
        let backend = capabilities.backend;

        Ok(Self {
            backend,
            pool: SurfacePool::new(backend, pool_size),
            capabilities,
            // Stands in for the real device handle a platform binding
            // would return from e.g. `vaGetDisplay`/`D3D11CreateDevice`.
            device_handle: 1,
        })
    }

    /// The backend this context was initialized against.
    pub fn backend(&self) -> HwBackend {
        self.backend
    }

    /// The backend's reported capabilities.
    pub fn capabilities(&self) -> &HardwareCapabilities {
        &self.capabilities
    }

    /// The surface pool's configured size.
    pub fn pool_size(&self) -> usize {
        self.pool.size()
    }

    /// Number of surfaces currently checked out of the pool.
    pub fn surfaces_in_use(&self) -> usize {
        self.pool.in_use()
    }

    /// Checks out a free decode-target surface.
    ///
    /// Returns `HardwareError::SurfacesExhausted` if every surface is still
    /// referenced by a queued or presented frame; the caller should treat
    /// this as a pool-sizing defect, not a transient condition (spec §9
    /// testable property 5).
    pub fn acquire_surface(&self) -> HardwareResult<HwSurfaceHandle> {
        self.pool.acquire()
    }

    /// The raw device handle, exposed so the renderer can attempt context
    /// sharing. If sharing succeeds the renderer samples decoded surfaces
    /// directly; if not, it must copy through system memory (spec §4.3).
    pub fn device_handle(&self) -> RawDeviceHandle {
        self.device_handle
    }

    /// Wraps this context for sharing between the decoder and renderer.
    /// Both sides hold a clone of the returned `Arc`; the context is torn
    /// down only once both have dropped it.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
