//! Surface pool sizing and allocation (spec §4.3/§9).
//!
//! A hardware decode target is never malloc'd per frame: the device owns a
//! fixed set of GPU textures recycled via [`HwSurfaceHandle`]'s refcounted
//! release. Undersizing this pool reproduces as "resource busy" on every
//! other decode at 4K, so the size is derived from an explicit formula
//! rather than picked experimentally per platform.

use crate::error::HardwareError;
use mediacore_shared_types::{HwBackend, HwSurfaceHandle, VideoCodec};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// The player's own frame queue depth in the worst case (spec §4.3 rationale:
/// "the player's frame queue (≥4 worst case)").
pub const DEFAULT_RENDER_BUFFERING: usize = 4;

/// Display back-buffer chain plus a small margin for seek overlap (spec
/// §4.3 rationale: "the display's back-buffer chain (2-3), plus a small
/// margin for seek overlap").
pub const DEFAULT_MARGIN: usize = 3;

/// Empirical floor for 4K H.264/HEVC with a queued pipeline (spec §4.3/§9,
/// and property 5 in the testable-properties table: pool size 12 passes,
/// pool size 6 reproducibly fails).
pub const MIN_POOL_SIZE: usize = 12;

/// The codec's decoded-picture buffer depth (spec §4.3 rationale: "3-8").
///
/// Matched by codec variant only; profile/level do not change the DPB
/// enough to matter for pool sizing.
pub fn dpb_for_codec(codec: &VideoCodec) -> usize {
    match codec {
        VideoCodec::H264 { .. } => 6,
        VideoCodec::H265 { .. } => 8,
        VideoCodec::VP8 => 3,
        VideoCodec::VP9 { .. } => 6,
        VideoCodec::AV1 { .. } => 8,
        VideoCodec::Theora => 3,
    }
}

/// `initial_pool_size = max(dpb_for_codec + render_buffering + margin, 12)`
/// (spec §4.3).
pub fn initial_pool_size(codec: &VideoCodec, render_buffering: usize, margin: usize) -> usize {
    (dpb_for_codec(codec) + render_buffering + margin).max(MIN_POOL_SIZE)
}

struct Inner {
    backend: HwBackend,
    free: Mutex<VecDeque<u32>>,
    size: usize,
}

/// A fixed-size pool of GPU decode-target surfaces.
///
/// Surfaces are handed out as [`HwSurfaceHandle`]s; the slot returns to the
/// pool's free list when the last clone of the handle drops, which is how a
/// frame still queued for render (or still presented) keeps its surface
/// alive without the pool needing to track frame lifetimes itself.
pub struct SurfacePool {
    inner: Arc<Inner>,
}

impl SurfacePool {
    /// Creates a pool of `size` surfaces for `backend`.
    pub fn new(backend: HwBackend, size: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                backend,
                free: Mutex::new((0..size as u32).collect()),
                size,
            }),
        }
    }

    /// The pool's fixed size.
    pub fn size(&self) -> usize {
        self.inner.size
    }

    /// Number of surfaces currently checked out.
    pub fn in_use(&self) -> usize {
        self.inner.size - self.inner.free.lock().len()
    }

    /// Checks out a free surface, or fails if the pool is exhausted.
    pub fn acquire(&self) -> Result<HwSurfaceHandle, HardwareError> {
        let id = self
            .inner
            .free
            .lock()
            .pop_front()
            .ok_or(HardwareError::SurfacesExhausted {
                pool_size: self.inner.size,
            })?;

        let inner = Arc::clone(&self.inner);
        Ok(HwSurfaceHandle::new(id, self.inner.backend, move |id| {
            inner.free.lock().push_back(id);
        }))
    }
}
