//! Error types for hardware acceleration operations

use mediacore_shared_types::MediaError;
use thiserror::Error;

/// Hardware acceleration error types
///
/// # Examples
///
/// ```
/// use mediacore_hardware_accel::HardwareError;
///
/// let error = HardwareError::NotAvailable;
/// println!("Error: {}", error);
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HardwareError {
    /// Hardware acceleration is not available on this platform
    #[error("hardware acceleration not available")]
    NotAvailable,

    /// The requested codec is not supported by hardware
    #[error("codec not supported by hardware")]
    UnsupportedCodec,

    /// Hardware device or surface pool initialization failed
    #[error("hardware initialization failed: {0}")]
    InitializationFailed(String),

    /// The surface pool has no free slots left to hand out
    #[error("surface pool exhausted (size {pool_size})")]
    SurfacesExhausted {
        /// The pool's configured size when exhaustion was observed.
        pool_size: usize,
    },

    /// The GPU device context was lost and must be recreated
    #[error("hardware device lost")]
    DeviceLost,
}

/// Result type for hardware acceleration operations
pub type HardwareResult<T> = Result<T, HardwareError>;

impl From<HardwareError> for MediaError {
    fn from(err: HardwareError) -> Self {
        match err {
            HardwareError::NotAvailable => MediaError::DecoderInitFailed(err.to_string()),
            HardwareError::UnsupportedCodec => MediaError::UnsupportedCodec(err.to_string()),
            HardwareError::InitializationFailed(_) => MediaError::DecoderInitFailed(err.to_string()),
            HardwareError::SurfacesExhausted { .. } => MediaError::RenderError(err.to_string()),
            HardwareError::DeviceLost => MediaError::ContextLost,
        }
    }
}
