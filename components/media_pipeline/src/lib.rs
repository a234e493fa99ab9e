//! # media_pipeline Component
//!
//! Pipeline orchestration and A/V synchronization: the master [`Clock`]
//! (spec §4.7), the [`PlaybackController`] that owns the demux/decode
//! worker tasks, and the seek protocol (spec §4.9/§4.10).
//!
//! # Examples
//!
//! ```
//! use mediacore_media_pipeline::Clock;
//!
//! let mut clock = Clock::new();
//! clock.update_audio(0);
//! assert_eq!(clock.master_clock_ms(), 0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod pipeline;
mod sync;
mod types;

// Re-export public API
pub use pipeline::PlaybackController;
pub use sync::{Clock, ClockMaster};
pub use types::{PipelineConfig, PlaybackStats, SyncDecision};
