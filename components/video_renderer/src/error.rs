//! Error types for the video renderer.

use mediacore_shared_types::MediaError;
use thiserror::Error;

/// Video renderer error types.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VideoRenderError {
    /// `render_frame`/`present` were called before `init`.
    #[error("renderer used before initialization")]
    NotInitialized,

    /// A frame arrived with a pixel format the active backend can't
    /// display (e.g. a hardware surface handed to the software backend).
    #[error("unsupported frame format for this render backend")]
    UnsupportedFrame,

    /// The render thread behind a proxy terminated unexpectedly.
    #[error("render thread disconnected")]
    ThreadGone,

    /// Swapchain/surface (re)creation failed.
    #[error("surface initialization failed: {0}")]
    SurfaceInitFailed(String),
}

/// Result type for video renderer operations.
pub type VideoRenderResult<T> = Result<T, VideoRenderError>;

impl From<VideoRenderError> for MediaError {
    fn from(err: VideoRenderError) -> Self {
        match err {
            VideoRenderError::NotInitialized => MediaError::NotInitialized,
            VideoRenderError::UnsupportedFrame => MediaError::InvalidTarget(err.to_string()),
            VideoRenderError::ThreadGone => MediaError::RenderError(err.to_string()),
            VideoRenderError::SurfaceInitFailed(_) => MediaError::TextureCreateFailed(err.to_string()),
        }
    }
}
