//! Resolves a URL to its bytes, applying the protocol-specific options from
//! spec §4.1.
//!
//! The bound container parsers in this crate are pure-Rust random-access
//! readers (`mp4`, `webm-iterable`, `ogg`), not incremental network
//! demuxers, so the whole source is assembled before it is handed to one of
//! them — this crate's `Buffering` state therefore only ever covers *this*
//! fetch, not a mid-playback stall once the container is open (spec §1: the
//! core "never duplicates" the media library's parsing logic, and this
//! crate has no ffmpeg/gstreamer binding to lean on for RTSP/RTMP/UDP, let
//! alone a growing/live container). Within that fetch, HTTP(S) reads are
//! genuinely incremental and reconnect-aware: the body is read in bounded
//! chunks rather than one blocking `.bytes()` call, and a stalled read is
//! retried with an HTTP `Range` request that resumes from the bytes already
//! received, backing off by [`ProtocolOptions::max_reconnect_delay`] between
//! attempts, mirroring the reconnect handling `other_examples`' ffmpeg-based
//! players build around `reconnect`/`reconnect_streamed` options.

use mediacore_shared_types::{MediaError, ProtocolOptions};
use std::io::Read;

/// Bytes read per `Read::read` call against the response body.
const HTTP_CHUNK_SIZE: usize = 64 * 1024;
/// Maximum number of reconnect attempts after the initial request.
const MAX_RECONNECT_ATTEMPTS: u32 = 3;

/// The scheme a URL was classified under, driving which [`ProtocolOptions`]
/// apply and whether this crate can actually read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UrlScheme {
    File,
    Http,
    Rtsp,
    Rtmp,
    Udp,
}

pub(crate) fn classify(url: &str) -> Result<(UrlScheme, ProtocolOptions), MediaError> {
    if let Some(rest) = url.strip_prefix("http://").or_else(|| url.strip_prefix("https://")) {
        let _ = rest;
        return Ok((UrlScheme::Http, ProtocolOptions::HTTP));
    }
    if url.starts_with("rtsp://") {
        return Ok((UrlScheme::Rtsp, ProtocolOptions::RTSP_RTMP));
    }
    if url.starts_with("rtmp://") {
        return Ok((UrlScheme::Rtmp, ProtocolOptions::RTSP_RTMP));
    }
    if url.starts_with("udp://") {
        return Ok((UrlScheme::Udp, ProtocolOptions::UDP));
    }
    if url.contains("://") {
        return Err(MediaError::InvalidParam(format!("unsupported URL scheme: {url}")));
    }
    Ok((UrlScheme::File, ProtocolOptions::LOCAL))
}

/// Reads the full contents of `url`, applying `protocol`'s timeout for
/// network schemes.
pub(crate) fn fetch_bytes(url: &str, scheme: UrlScheme, protocol: ProtocolOptions) -> Result<Vec<u8>, MediaError> {
    match scheme {
        UrlScheme::File => {
            let path = url.strip_prefix("file://").unwrap_or(url);
            std::fs::read(path).map_err(|e| MediaError::IOError(format!("{path}: {e}")))
        }
        UrlScheme::Http => fetch_http(url, protocol),
        UrlScheme::Rtsp | UrlScheme::Rtmp | UrlScheme::Udp => Err(MediaError::NetworkError(format!(
            "{url}: RTSP/RTMP/UDP ingestion requires a bound streaming backend \
             (e.g. an ffmpeg/gstreamer binding); this pure-Rust parser set only \
             reads local files and HTTP(S)"
        ))),
    }
}

fn fetch_http(url: &str, protocol: ProtocolOptions) -> Result<Vec<u8>, MediaError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(protocol.timeout)
        .build()
        .map_err(|e| MediaError::NetworkError(e.to_string()))?;

    let mut buf = Vec::new();
    let mut attempt = 0u32;
    loop {
        match read_http_body(&client, url, &mut buf) {
            Ok(()) => return Ok(buf),
            Err(e) if attempt < MAX_RECONNECT_ATTEMPTS && is_retriable(&e) => {
                attempt += 1;
                tracing::warn!(
                    "stalled reading {url} at {} bytes ({e}), reconnecting (attempt {attempt}/{MAX_RECONNECT_ATTEMPTS})",
                    buf.len()
                );
                std::thread::sleep(protocol.max_reconnect_delay);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Whether a failed fetch attempt is worth reconnecting for, as opposed to
/// a definitive rejection (bad URL, 4xx/5xx status) that a retry can't fix.
fn is_retriable(error: &MediaError) -> bool {
    matches!(error, MediaError::Timeout | MediaError::Unreachable | MediaError::IOError(_))
}

/// Issues one GET (resuming from `buf.len()` via `Range` past the first
/// attempt) and reads the response body into `buf` in bounded chunks, so a
/// connection drop mid-body is observed as soon as the next chunk read
/// fails rather than only after the whole body would have been buffered.
fn read_http_body(client: &reqwest::blocking::Client, url: &str, buf: &mut Vec<u8>) -> Result<(), MediaError> {
    let mut request = client.get(url);
    if !buf.is_empty() {
        request = request.header(reqwest::header::RANGE, format!("bytes={}-", buf.len()));
    }

    let mut response = request.send().map_err(|e| {
        if e.is_timeout() {
            MediaError::Timeout
        } else if e.is_connect() {
            MediaError::Unreachable
        } else {
            MediaError::NetworkError(e.to_string())
        }
    })?;

    if !response.status().is_success() {
        return Err(MediaError::NetworkError(format!("HTTP {}", response.status())));
    }

    let mut chunk = [0u8; HTTP_CHUNK_SIZE];
    loop {
        let read = response.read(&mut chunk).map_err(|e| MediaError::IOError(e.to_string()))?;
        if read == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..read]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_local_paths() {
        let (scheme, opts) = classify("movie.mp4").unwrap();
        assert_eq!(scheme, UrlScheme::File);
        assert_eq!(opts, ProtocolOptions::LOCAL);
    }

    #[test]
    fn classifies_http() {
        let (scheme, opts) = classify("http://host/stream.mp4").unwrap();
        assert_eq!(scheme, UrlScheme::Http);
        assert_eq!(opts.buffer_bytes, ProtocolOptions::HTTP.buffer_bytes);
    }

    #[test]
    fn classifies_rtsp_with_tcp_forced() {
        let (scheme, opts) = classify("rtsp://host/live").unwrap();
        assert_eq!(scheme, UrlScheme::Rtsp);
        assert!(opts.force_tcp);
    }

    #[test]
    fn unknown_scheme_is_rejected() {
        assert!(classify("ftp://host/file").is_err());
    }

    #[test]
    fn rtsp_read_fails_without_a_bound_backend() {
        let result = fetch_bytes("rtsp://host/live", UrlScheme::Rtsp, ProtocolOptions::RTSP_RTMP);
        assert!(matches!(result, Err(MediaError::NetworkError(_))));
    }
}
