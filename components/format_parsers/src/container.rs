//! Internal per-format reader contract that [`crate::demuxer::MediaDemuxer`]
//! dispatches to once a container's bytes have been fetched.

use mediacore_shared_types::{MediaError, MediaInfo, Packet};

/// One open container, already probed. Implementations own their own
/// cursor into whichever of the active video/audio tracks each holds.
pub(crate) trait ContainerDemuxer: Send {
    /// Parses `bytes` and reports the streams it found.
    fn open(bytes: Vec<u8>) -> Result<(Self, MediaInfo), MediaError>
    where
        Self: Sized;

    /// Reads the next packet in container order across whichever streams
    /// are active, or `Ok(None)` at end of stream.
    fn read_packet(&mut self) -> Result<Option<Packet>, MediaError>;

    /// Repositions to the keyframe at-or-before `target_ms` when
    /// `backward`, or the first keyframe at-or-after it otherwise.
    fn seek(&mut self, target_ms: u64, backward: bool) -> Result<(), MediaError>;

    /// Total duration, if known from the container header.
    fn duration_ms(&self) -> Option<u64>;
}
