//! cpal-backed [`AudioOutput`] device.
//!
//! The device callback only ever memcpys samples out of a shared queue and
//! applies volume as a multiply; it never allocates, locks for longer than
//! the pop/push, or blocks (spec §4.5 hard real-time constraint on the
//! audio callback). Queue shape and the callback's underrun bookkeeping
//! follow `other_examples`' cpal-based player (`ffmpeg-player.rs`'s
//! `AudioQueue` and `cpal_stream<T>`); frames are assumed to already be in
//! `f32` PCM (see `resampler.rs`), matching that example's device-callback
//! sample type. The queue itself is a [`BoundedQueue`] (spec §3/§4.5:
//! producers block on backpressure rather than allocate without limit), so
//! the callback drains it with the non-blocking `try_pop` while `submit`
//! blocks the decode/resample thread when the device can't keep up.

use crate::error::{AudioOutputError, AudioOutputResult};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SizedSample};
use mediacore_buffer_manager::{BoundedQueue, CancellationToken};
use mediacore_shared_types::{AudioOutput, MediaError, MediaResult, ResampledAudioFrame};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use tracing::{error, warn};

/// Default queue capacity when `init` is called with a zero buffer size.
const MIN_QUEUE_CAPACITY: usize = 2048;
/// How many device callback fills the queue is sized to absorb before a
/// producer calling `submit` blocks.
const QUEUE_FILLS_OF_HEADROOM: usize = 8;

/// Audio output device backed by the host's default cpal output stream.
pub struct AudioPlayer {
    stream: Option<cpal::Stream>,
    queue: BoundedQueue<f32>,
    cancel: CancellationToken,
    volume_bits: Arc<AtomicU32>,
    playing: Arc<AtomicBool>,
    underruns: Arc<AtomicU32>,
    device_name: String,
    rate: u32,
    channels: u8,
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioPlayer {
    /// Creates an uninitialized player; call [`AudioOutput::init`] before
    /// use.
    pub fn new() -> Self {
        Self {
            stream: None,
            queue: BoundedQueue::new(MIN_QUEUE_CAPACITY),
            cancel: CancellationToken::new(),
            volume_bits: Arc::new(AtomicU32::new(1.0f32.to_bits())),
            playing: Arc::new(AtomicBool::new(false)),
            underruns: Arc::new(AtomicU32::new(0)),
            device_name: String::new(),
            rate: 0,
            channels: 0,
        }
    }

    /// Number of samples the device callback had to synthesize as silence
    /// because the queue ran dry, since the last call.
    pub fn underrun_count(&self) -> u32 {
        self.underruns.swap(0, Ordering::Relaxed)
    }

    fn build_stream(&mut self, device: &cpal::Device, config: &cpal::StreamConfig, sample_format: cpal::SampleFormat) -> AudioOutputResult<cpal::Stream> {
        match sample_format {
            cpal::SampleFormat::F32 => self.build_typed_stream::<f32>(device, config),
            cpal::SampleFormat::I16 => self.build_typed_stream::<i16>(device, config),
            cpal::SampleFormat::U16 => self.build_typed_stream::<u16>(device, config),
            other => Err(AudioOutputError::UnsupportedConfig {
                rate: config.sample_rate.0,
                channels: config.channels as u8,
            })
            .map_err(|e| {
                warn!(?other, "unsupported cpal sample format");
                e
            }),
        }
    }

    fn build_typed_stream<T>(&mut self, device: &cpal::Device, config: &cpal::StreamConfig) -> AudioOutputResult<cpal::Stream>
    where
        T: SizedSample + FromSample<f32>,
    {
        let queue = self.queue.clone();
        let volume_bits = Arc::clone(&self.volume_bits);
        let underruns = Arc::clone(&self.underruns);

        let data_fn = move |samples: &mut [T], _info: &cpal::OutputCallbackInfo| {
            let volume = f32::from_bits(volume_bits.load(Ordering::Relaxed));
            let mut missed = 0u32;
            for sample in samples.iter_mut() {
                let value = match queue.try_pop() {
                    Some(v) => v * volume,
                    None => {
                        missed += 1;
                        0.0
                    }
                };
                *sample = T::from_sample(value);
            }
            if missed > 0 {
                underruns.fetch_add(missed, Ordering::Relaxed);
            }
        };

        let err_fn = |err| error!(%err, "audio output stream error");

        device
            .build_output_stream(config, data_fn, err_fn, None)
            .map_err(|e| AudioOutputError::StreamFailed(e.to_string()))
    }
}

impl AudioOutput for AudioPlayer {
    fn init(&mut self, rate: u32, channels: u8, bits_per_sample: u16, buffer_size: usize) -> MediaResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioOutputError::NoDevice)?;

        let config = cpal::StreamConfig {
            channels: channels as cpal::ChannelCount,
            sample_rate: cpal::SampleRate(rate),
            buffer_size: cpal::BufferSize::Default,
        };

        let sample_format = match bits_per_sample {
            16 => cpal::SampleFormat::I16,
            _ => cpal::SampleFormat::F32,
        };

        let capacity = buffer_size.max(MIN_QUEUE_CAPACITY) * QUEUE_FILLS_OF_HEADROOM;
        self.queue = BoundedQueue::new(capacity);
        self.cancel = CancellationToken::new();
        let stream = self.build_stream(&device, &config, sample_format)?;
        stream.pause().map_err(|e| AudioOutputError::StreamFailed(e.to_string()))?;

        self.device_name = device.name().unwrap_or_else(|_| "unknown output device".to_string());
        self.rate = rate;
        self.channels = channels;
        self.stream = Some(stream);
        Ok(())
    }

    fn start(&mut self) -> MediaResult<()> {
        let stream = self.stream.as_ref().ok_or(AudioOutputError::NotInitialized)?;
        stream.play().map_err(|e| AudioOutputError::StreamFailed(e.to_string()))?;
        self.playing.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&mut self) -> MediaResult<()> {
        if let Some(stream) = &self.stream {
            stream.pause().map_err(|e| AudioOutputError::StreamFailed(e.to_string()))?;
        }
        self.playing.store(false, Ordering::SeqCst);
        self.cancel.stop();
        self.queue.clear();
        Ok(())
    }

    fn pause(&mut self) -> MediaResult<()> {
        let stream = self.stream.as_ref().ok_or(AudioOutputError::NotInitialized)?;
        stream.pause().map_err(|e| AudioOutputError::StreamFailed(e.to_string()))?;
        self.playing.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn resume(&mut self) -> MediaResult<()> {
        let stream = self.stream.as_ref().ok_or(AudioOutputError::NotInitialized)?;
        stream.play().map_err(|e| AudioOutputError::StreamFailed(e.to_string()))?;
        self.playing.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn submit(&mut self, frame: ResampledAudioFrame) -> MediaResult<()> {
        if frame.bytes_per_sample != 4 {
            return Err(MediaError::UnsupportedAudioFormat(format!(
                "device expects f32 PCM (4 bytes/sample), got {}",
                frame.bytes_per_sample
            )));
        }
        let samples = frame
            .pcm_data
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]));
        for sample in samples {
            if self.queue.push_blocking(sample, &self.cancel).is_err() {
                return Err(AudioOutputError::StreamFailed("device queue cancelled".to_string()).into());
            }
        }
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) -> MediaResult<()> {
        let clamped = volume.clamp(0.0, 1.0);
        self.volume_bits.store(clamped.to_bits(), Ordering::Relaxed);
        Ok(())
    }

    fn get_volume(&self) -> f32 {
        f32::from_bits(self.volume_bits.load(Ordering::Relaxed))
    }

    fn flush(&mut self) -> MediaResult<()> {
        if self.playing.load(Ordering::SeqCst) {
            return Err(AudioOutputError::FlushWhilePlaying.into());
        }
        self.queue.clear();
        Ok(())
    }

    fn device_name(&self) -> String {
        self.device_name.clone()
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        // Unblocks a producer thread parked in `submit`'s backpressure wait
        // once this device is torn down.
        self.cancel.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_reports_not_playing() {
        let player = AudioPlayer::new();
        assert!(!player.is_playing());
        assert_eq!(player.get_volume(), 1.0);
    }

    #[test]
    fn submit_before_init_still_queues_samples() {
        let mut player = AudioPlayer::new();
        let frame = ResampledAudioFrame {
            pcm_data: 1.0f32.to_le_bytes().to_vec(),
            sample_count: 1,
            rate: 48_000,
            channels: 1,
            bytes_per_sample: 4,
            pts_ms: 0,
        };
        player.submit(frame).unwrap();
        assert_eq!(player.queue.len(), 1);
    }

    #[test]
    fn submit_rejects_non_f32_payloads() {
        let mut player = AudioPlayer::new();
        let frame = ResampledAudioFrame {
            pcm_data: vec![0, 0],
            sample_count: 1,
            rate: 48_000,
            channels: 1,
            bytes_per_sample: 2,
            pts_ms: 0,
        };
        assert!(player.submit(frame).is_err());
    }

    #[test]
    fn flush_while_playing_is_rejected() {
        let mut player = AudioPlayer::new();
        player.playing.store(true, Ordering::SeqCst);
        assert!(player.flush().is_err());
    }

    #[test]
    fn volume_is_clamped() {
        let mut player = AudioPlayer::new();
        player.set_volume(5.0).unwrap();
        assert_eq!(player.get_volume(), 1.0);
        player.set_volume(-1.0).unwrap();
        assert_eq!(player.get_volume(), 0.0);
    }
}
