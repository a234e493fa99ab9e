//! # format_parsers Component
//!
//! Container format demuxing (MP4, WebM, Matroska, Ogg) implementing the
//! streaming [`mediacore_shared_types::Demuxer`] contract.
//!
//! A single [`MediaDemuxer`] opens a URL (local path or HTTP(S)), sniffs its
//! container format from magic bytes (falling back to the file extension),
//! and demuxes video/audio packets in container order.
//!
//! # Examples
//!
//! ```no_run
//! use mediacore_format_parsers::MediaDemuxer;
//! use mediacore_shared_types::Demuxer;
//!
//! let mut demuxer = MediaDemuxer::new();
//! let info = demuxer.open("movie.mp4").unwrap();
//! println!("duration: {:?}", info.duration);
//! while let Some(packet) = demuxer.read_packet().unwrap() {
//!     let _ = packet;
//! }
//! ```

#![warn(missing_docs)]

mod container;
mod demuxer;
mod matroska_container;
mod mp4_container;
mod ogg_container;
mod source;

pub use demuxer::MediaDemuxer;
