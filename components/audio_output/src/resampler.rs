//! Converts decoded [`AudioFrame`]s to the output device's rate/channel
//! layout.
//!
//! Built lazily: a resampler is only constructed once the first frame's
//! source rate/channels are known, and rebuilt if a later frame arrives
//! with a different source format (a mid-stream track change). When the
//! source already matches the target exactly, frames take an identity
//! fast path that skips `rubato` entirely and only repacks `f32` samples
//! into interleaved target bytes.

use crate::error::{AudioOutputError, AudioOutputResult};
use mediacore_shared_types::{AudioFrame, ResampledAudioFrame};
use rubato::{Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction};
use std::collections::VecDeque;

const CHUNK_SIZE: usize = 1024;

struct ActiveResampler {
    inner: SincFixedIn<f32>,
    source_rate: u32,
    source_channels: u8,
    // Per-channel accumulation buffers; rubato's `SincFixedIn` only
    // accepts exactly `CHUNK_SIZE` input frames per channel per call.
    pending: Vec<VecDeque<f32>>,
}

/// Resamples decoded audio to a fixed target rate/channel count, producing
/// device-ready [`ResampledAudioFrame`]s.
pub struct AudioResampler {
    target_rate: u32,
    target_channels: u8,
    resampler: Option<ActiveResampler>,
}

impl AudioResampler {
    /// Creates a resampler targeting `target_rate`/`target_channels`.
    pub fn new(target_rate: u32, target_channels: u8) -> Self {
        Self {
            target_rate,
            target_channels,
            resampler: None,
        }
    }

    /// Converts one decoded frame. May return zero samples if rubato's
    /// internal chunking hasn't accumulated a full window yet; the next
    /// call will include the carried-over tail.
    pub fn process(&mut self, frame: AudioFrame) -> AudioOutputResult<ResampledAudioFrame> {
        if frame.channels == 0 {
            return Err(AudioOutputError::ResampleFailed("zero-channel frame".to_string()));
        }

        if frame.sample_rate == self.target_rate && frame.channels == self.target_channels {
            return Ok(interleaved_to_resampled(&frame.samples, self.target_rate, self.target_channels, frame.pts_ms));
        }

        self.ensure_resampler(frame.sample_rate, frame.channels)?;
        let active = self.resampler.as_mut().expect("ensure_resampler just populated it");

        let deinterleaved = deinterleave(&frame.samples, frame.channels as usize);
        for (ch, samples) in deinterleaved.into_iter().enumerate() {
            active.pending[ch].extend(samples);
        }

        if active.pending[0].len() < CHUNK_SIZE {
            return Ok(ResampledAudioFrame {
                pcm_data: Vec::new(),
                sample_count: 0,
                rate: self.target_rate,
                channels: self.target_channels,
                bytes_per_sample: 4,
                pts_ms: frame.pts_ms,
            });
        }

        let input: Vec<Vec<f32>> = active
            .pending
            .iter_mut()
            .map(|ch| ch.drain(..CHUNK_SIZE).collect())
            .collect();

        let output = active
            .inner
            .process(&input, None)
            .map_err(|e| AudioOutputError::ResampleFailed(e.to_string()))?;

        let channels = output.len();
        let frames = output.first().map(|c| c.len()).unwrap_or(0);
        let mut interleaved = Vec::with_capacity(frames * channels);
        for i in 0..frames {
            for channel in &output {
                interleaved.push(channel[i]);
            }
        }

        Ok(interleaved_to_resampled(&interleaved, self.target_rate, self.target_channels, frame.pts_ms))
    }

    /// Clears any buffered partial chunk without discarding the resampler
    /// itself (used on seek per spec §4.10 — decoders flush, the
    /// resampler only drops stale samples).
    pub fn reset(&mut self) {
        if let Some(active) = &mut self.resampler {
            active.inner.reset();
            for ch in &mut active.pending {
                ch.clear();
            }
        }
    }

    fn ensure_resampler(&mut self, source_rate: u32, source_channels: u8) -> AudioOutputResult<()> {
        if let Some(active) = &self.resampler {
            if active.source_rate == source_rate && active.source_channels == source_channels {
                return Ok(());
            }
        }

        let ratio = self.target_rate as f64 / source_rate as f64;
        let params = SincInterpolationParameters {
            sinc_len: 256,
            f_cutoff: 0.95,
            interpolation: SincInterpolationType::Linear,
            oversampling_factor: 256,
            window: WindowFunction::BlackmanHarris2,
        };
        let inner = SincFixedIn::new(ratio, 2.0, params, CHUNK_SIZE, source_channels as usize)
            .map_err(|e| AudioOutputError::ResampleFailed(e.to_string()))?;

        self.resampler = Some(ActiveResampler {
            inner,
            source_rate,
            source_channels,
            pending: vec![VecDeque::new(); source_channels as usize],
        });
        Ok(())
    }
}

fn deinterleave(samples: &[f32], channels: usize) -> Vec<Vec<f32>> {
    let mut out = vec![Vec::with_capacity(samples.len() / channels.max(1)); channels];
    for (i, &s) in samples.iter().enumerate() {
        out[i % channels].push(s);
    }
    out
}

fn interleaved_to_resampled(samples: &[f32], rate: u32, channels: u8, pts_ms: i64) -> ResampledAudioFrame {
    let mut pcm_data = Vec::with_capacity(samples.len() * 4);
    for &sample in samples {
        pcm_data.extend_from_slice(&sample.to_le_bytes());
    }
    let sample_count = if channels == 0 { 0 } else { samples.len() / channels as usize };
    ResampledAudioFrame {
        pcm_data,
        sample_count,
        rate,
        channels,
        bytes_per_sample: 4,
        pts_ms,
    }
}
