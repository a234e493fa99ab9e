//! Hardware render path: frames carry an opaque [`HwSurfaceHandle`]
//! instead of pixel bytes (spec §4.3/§4.8). This crate has no GPU/windowing
//! binding, so `render_frame` only tracks which surface is current and
//! retains a handle clone until `present`/`clear_caches` release it —
//! exactly the hand-off a real compositor-facing backend would need, minus
//! the actual texture import.

use crate::error::VideoRenderError;
use mediacore_shared_types::{HwSurfaceHandle, MediaResult, Renderer, VideoFrame};

/// Renders frames carrying GPU surfaces rather than software pixel data.
pub struct HardwareRenderer {
    width: u32,
    height: u32,
    initialized: bool,
    current: Option<HwSurfaceHandle>,
    presented: Option<HwSurfaceHandle>,
}

impl Default for HardwareRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareRenderer {
    /// Creates an uninitialized hardware renderer.
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            initialized: false,
            current: None,
            presented: None,
        }
    }

    /// The surface handle last pushed to the screen by `present`, if any.
    pub fn presented_surface(&self) -> Option<&HwSurfaceHandle> {
        self.presented.as_ref()
    }
}

impl Renderer for HardwareRenderer {
    fn init(&mut self, _window_handle: usize, width: u32, height: u32) -> MediaResult<()> {
        self.width = width;
        self.height = height;
        self.initialized = true;
        Ok(())
    }

    fn render_frame(&mut self, frame: &VideoFrame) -> MediaResult<()> {
        if !self.initialized {
            return Err(VideoRenderError::NotInitialized.into());
        }
        let Some(surface) = &frame.hw_surface else {
            return Err(VideoRenderError::UnsupportedFrame.into());
        };
        self.current = Some(surface.clone());
        Ok(())
    }

    fn present(&mut self) -> MediaResult<()> {
        if !self.initialized {
            return Err(VideoRenderError::NotInitialized.into());
        }
        self.presented = self.current.take();
        Ok(())
    }

    fn clear_caches(&mut self) -> MediaResult<()> {
        // Dropping these handles returns their pool slots (spec §3
        // invariant: no component retains a surface past the frame's
        // lifetime), exactly what must happen before/after a seek.
        self.current = None;
        self.presented = None;
        Ok(())
    }

    fn on_resize(&mut self, width: u32, height: u32) -> MediaResult<()> {
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn renderer_name(&self) -> String {
        "hardware".to_string()
    }
}
