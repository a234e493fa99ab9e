//! Public streaming demuxer facade (spec §4.1).

use crate::container::ContainerDemuxer;
use crate::matroska_container::MatroskaContainer;
use crate::mp4_container::Mp4Container;
use crate::ogg_container::OggContainer;
use crate::source;
use mediacore_shared_types::{Demuxer, MediaError, MediaInfo, Packet};

enum Container {
    Mp4(Mp4Container),
    Matroska(MatroskaContainer),
    Ogg(OggContainer),
}

impl Container {
    fn read_packet(&mut self) -> Result<Option<Packet>, MediaError> {
        match self {
            Container::Mp4(c) => c.read_packet(),
            Container::Matroska(c) => c.read_packet(),
            Container::Ogg(c) => c.read_packet(),
        }
    }

    fn seek(&mut self, target_ms: u64, backward: bool) -> Result<(), MediaError> {
        match self {
            Container::Mp4(c) => c.seek(target_ms, backward),
            Container::Matroska(c) => c.seek(target_ms, backward),
            Container::Ogg(c) => c.seek(target_ms, backward),
        }
    }

    fn duration_ms(&self) -> Option<u64> {
        match self {
            Container::Mp4(c) => c.duration_ms(),
            Container::Matroska(c) => c.duration_ms(),
            Container::Ogg(c) => c.duration_ms(),
        }
    }
}

/// Sniffs a container format from its leading bytes, falling back to the
/// URL's file extension when the magic bytes are inconclusive.
fn detect_format(url: &str, bytes: &[u8]) -> Format {
    if bytes.len() >= 12 && &bytes[4..8] == b"ftyp" {
        return Format::Mp4;
    }
    if bytes.len() >= 4 && &bytes[0..4] == b"\x1a\x45\xdf\xa3" {
        return Format::Matroska;
    }
    if bytes.len() >= 4 && &bytes[0..4] == b"OggS" {
        return Format::Ogg;
    }

    let lower = url.to_ascii_lowercase();
    if lower.ends_with(".mp4") || lower.ends_with(".m4a") || lower.ends_with(".mov") {
        Format::Mp4
    } else if lower.ends_with(".webm") || lower.ends_with(".mkv") {
        Format::Matroska
    } else {
        Format::Ogg
    }
}

enum Format {
    Mp4,
    Matroska,
    Ogg,
}

/// Implements [`Demuxer`] by fetching a URL's bytes (spec §4.1 protocol
/// options) and dispatching to the container reader its magic bytes (or
/// extension) indicate.
pub struct MediaDemuxer {
    container: Option<Container>,
}

impl Default for MediaDemuxer {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaDemuxer {
    /// Creates an unopened demuxer.
    pub fn new() -> Self {
        Self { container: None }
    }
}

impl Demuxer for MediaDemuxer {
    fn open(&mut self, url: &str) -> Result<MediaInfo, MediaError> {
        let (scheme, protocol) = source::classify(url)?;
        let bytes = source::fetch_bytes(url, scheme, protocol)?;

        let (container, info) = match detect_format(url, &bytes) {
            Format::Mp4 => {
                let (c, info) = Mp4Container::open(bytes)?;
                (Container::Mp4(c), info)
            }
            Format::Matroska => {
                let (c, info) = MatroskaContainer::open(bytes)?;
                (Container::Matroska(c), info)
            }
            Format::Ogg => {
                let (c, info) = OggContainer::open(bytes)?;
                (Container::Ogg(c), info)
            }
        };

        self.container = Some(container);
        Ok(info)
    }

    fn read_packet(&mut self) -> Result<Option<Packet>, MediaError> {
        let container = self.container.as_mut().ok_or(MediaError::NotInitialized)?;
        container.read_packet()
    }

    fn seek(&mut self, target_ms: u64, backward: bool) -> Result<(), MediaError> {
        let container = self.container.as_mut().ok_or(MediaError::NotInitialized)?;
        container.seek(target_ms, backward)
    }

    fn duration_ms(&self) -> Option<u64> {
        self.container.as_ref().and_then(|c| c.duration_ms())
    }
}
