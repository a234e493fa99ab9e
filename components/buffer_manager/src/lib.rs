//! # buffer_manager
//!
//! Memory buffers, bounded blocking queues, and cancellation for the
//! playback pipeline.
//!
//! - [`RingBuffer`] — circular buffer for streaming byte data.
//! - [`BoundedQueue`] — single-producer/single-consumer queue with
//!   backpressure and cancellation, used for every packet/frame queue in
//!   the pipeline.
//! - [`CancellationToken`] — the `ShouldStop || ShouldPause` predicate
//!   every blocking wait consults.
//! - [`BufferManager`] — tracks memory usage against a configured ceiling.
//!
//! # Examples
//!
//! Creating a ring buffer:
//!
//! ```
//! use mediacore_buffer_manager::RingBuffer;
//!
//! let mut buffer = RingBuffer::new(1024);
//! buffer.write(b"Hello, world!").unwrap();
//!
//! let mut out = vec![0u8; 13];
//! let n = buffer.read(&mut out).unwrap();
//! assert_eq!(n, 13);
//! assert_eq!(&out, b"Hello, world!");
//! ```

#![warn(missing_docs)]

mod cancel;
mod config;
mod error;
mod manager;
mod queue;
mod ring;

pub use cancel::{CancellationToken, POLL_INTERVAL};
pub use config::BufferConfig;
pub use error::BufferError;
pub use manager::{AudioSampleBuffer, BufferManager, VideoFrameBuffer};
pub use queue::BoundedQueue;
pub use ring::RingBuffer;
