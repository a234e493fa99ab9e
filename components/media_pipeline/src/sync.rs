//! A/V synchronization clock — the analytical heart of the pipeline (spec
//! §4.7).

use crate::types::SyncDecision;
use std::time::{Duration, Instant};

/// Default low-pass filter coefficient for drift smoothing.
const DRIFT_ALPHA: f64 = 0.1;
/// Default frame-drop threshold: a video frame this far behind the master
/// clock is discarded rather than displayed.
const DEFAULT_DROP_THRESHOLD: Duration = Duration::from_millis(80);
/// Default frame-repeat threshold, currently a design hook only.
const DEFAULT_REPEAT_THRESHOLD: Duration = Duration::from_millis(20);
/// Default clamp on how far ahead of the master clock a frame delay may run.
const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(100);
/// Default clamp on how far behind a frame may be asked to speed up by.
const DEFAULT_MAX_SPEEDUP: Duration = Duration::from_millis(100);

/// Which stream drives the master clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockMaster {
    /// Audio PTS updates drive the master clock (the default).
    #[default]
    AudioMaster,
    /// Video PTS updates drive the master clock.
    VideoMaster,
    /// An externally supplied wall-clock source drives the master clock.
    ExternalMaster,
}

#[derive(Debug, Clone, Copy)]
struct StreamOrigin {
    first_raw_pts_ms: i64,
}

impl StreamOrigin {
    fn normalize(&self, raw_pts_ms: i64) -> i64 {
        raw_pts_ms - self.first_raw_pts_ms
    }
}

#[derive(Debug, Clone, Copy)]
struct ClockSample {
    norm_pts_ms: i64,
    wall: Instant,
}

/// The master playback clock: tracks independent per-stream PTS
/// normalization origins, the last sample reported by the master stream,
/// drift between predicted and actual PTS, and paused wall-clock time.
///
/// All mutation happens through `&mut self` — callers serialize access
/// with their own lock (spec §5: "guarded by a fine-grained mutex").
#[derive(Debug)]
pub struct Clock {
    master: ClockMaster,
    audio_origin: Option<StreamOrigin>,
    video_origin: Option<StreamOrigin>,
    last_master_sample: Option<ClockSample>,
    drift_ms: f64,
    paused: bool,
    pause_started_at: Option<Instant>,
    accumulated_pause: Duration,
    drop_threshold: Duration,
    repeat_threshold: Duration,
    max_delay: Duration,
    max_speedup: Duration,
}

impl Clock {
    /// Creates a new clock with audio as the default master.
    pub fn new() -> Self {
        Self {
            master: ClockMaster::AudioMaster,
            audio_origin: None,
            video_origin: None,
            last_master_sample: None,
            drift_ms: 0.0,
            paused: false,
            pause_started_at: None,
            accumulated_pause: Duration::ZERO,
            drop_threshold: DEFAULT_DROP_THRESHOLD,
            repeat_threshold: DEFAULT_REPEAT_THRESHOLD,
            max_delay: DEFAULT_MAX_DELAY,
            max_speedup: DEFAULT_MAX_SPEEDUP,
        }
    }

    /// Which stream currently drives the master clock.
    pub fn master(&self) -> ClockMaster {
        self.master
    }

    /// Switches which stream drives the master clock.
    pub fn set_master(&mut self, master: ClockMaster) {
        self.master = master;
    }

    fn normalize_audio(&mut self, raw_pts_ms: i64) -> i64 {
        let origin = *self.audio_origin.get_or_insert(StreamOrigin {
            first_raw_pts_ms: raw_pts_ms,
        });
        origin.normalize(raw_pts_ms)
    }

    fn normalize_video(&mut self, raw_pts_ms: i64) -> i64 {
        let origin = *self.video_origin.get_or_insert(StreamOrigin {
            first_raw_pts_ms: raw_pts_ms,
        });
        origin.normalize(raw_pts_ms)
    }

    /// Reports a non-silent audio fill at `raw_pts_ms`, returning the
    /// normalized PTS it was recorded under.
    ///
    /// Only updates the master-clock sample if audio is currently the
    /// master (spec §4.7 "Audio clock update").
    pub fn update_audio(&mut self, raw_pts_ms: i64) -> i64 {
        let norm = self.normalize_audio(raw_pts_ms);
        if self.master == ClockMaster::AudioMaster {
            self.record_master_sample(norm);
        }
        norm
    }

    /// Reports a rendered video frame at `raw_pts_ms`, returning the
    /// normalized PTS it was recorded under.
    ///
    /// Only updates the master-clock sample if video is currently the
    /// master.
    pub fn update_video(&mut self, raw_pts_ms: i64) -> i64 {
        let norm = self.normalize_video(raw_pts_ms);
        if self.master == ClockMaster::VideoMaster {
            self.record_master_sample(norm);
        }
        norm
    }

    fn record_master_sample(&mut self, norm_pts_ms: i64) {
        let now = Instant::now();
        if let Some(prev) = self.last_master_sample {
            let predicted = self.predict_from(prev, now);
            let raw_drift = (norm_pts_ms - predicted) as f64;
            self.drift_ms += DRIFT_ALPHA * (raw_drift - self.drift_ms);
        }
        self.last_master_sample = Some(ClockSample {
            norm_pts_ms,
            wall: now,
        });
    }

    fn predict_from(&self, sample: ClockSample, now: Instant) -> i64 {
        let elapsed = now.saturating_duration_since(sample.wall);
        let pause_during = if self.paused {
            // All elapsed wall time since the sample is paused time.
            elapsed
        } else {
            Duration::ZERO
        };
        let advanced = elapsed.saturating_sub(pause_during);
        sample.norm_pts_ms + advanced.as_millis() as i64
    }

    /// `master_clock(now)` (spec §4.7): the current predicted playback
    /// position in normalized milliseconds, or `0` before the first master
    /// sample has arrived.
    pub fn master_clock_ms(&self) -> i64 {
        match self.last_master_sample {
            Some(sample) => self.predict_from(sample, Instant::now()),
            None => 0,
        }
    }

    /// The smoothed drift estimate, exposed for statistics only; never fed
    /// back into the audio clock.
    pub fn smoothed_drift_ms(&self) -> f64 {
        self.drift_ms
    }

    /// Freezes the clock mapping; wall-clock advances until `resume` are
    /// credited to `accumulated_pause` and do not move `master_clock`.
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.pause_started_at = Some(Instant::now());
        }
    }

    /// Resumes the clock without jumping the reported PTS.
    pub fn resume(&mut self) {
        if self.paused {
            if let Some(started) = self.pause_started_at.take() {
                self.accumulated_pause += started.elapsed();
            }
            // Re-anchor the master sample to now so `predict_from` does not
            // double-count the paused interval as elapsed non-paused time.
            if let Some(sample) = &mut self.last_master_sample {
                sample.wall = Instant::now();
            }
            self.paused = false;
        }
    }

    /// Whether the clock is currently paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// `ResetForSeek(target_ms)` (spec §4.7/§4.10): clears both streams'
    /// normalization origins, zeros drift, and seeds the master sample with
    /// `target_ms` so pre-first-frame reads are sensible. Accumulated pause
    /// is left untouched.
    pub fn reset_for_seek(&mut self, target_ms: i64) {
        self.audio_origin = None;
        self.video_origin = None;
        self.drift_ms = 0.0;
        self.last_master_sample = Some(ClockSample {
            norm_pts_ms: target_ms,
            wall: Instant::now(),
        });
    }

    /// Computes a video frame's display delay and drop/display/wait
    /// decision relative to the current master clock (spec §4.7
    /// "Video-frame delay").
    pub fn sync_video_frame(&self, frame_norm_pts_ms: i64) -> SyncDecision {
        let master_ms = self.master_clock_ms();
        let delay_ms = frame_norm_pts_ms - master_ms;

        if delay_ms < 0 {
            let behind = Duration::from_millis((-delay_ms) as u64);
            if behind > self.drop_threshold {
                return SyncDecision::Drop;
            }
            return SyncDecision::Display;
        }

        let clamped_ms = (delay_ms as u64).min(self.max_delay.as_millis() as u64);
        let _ = self.max_speedup; // negative delays are clamped above, not here
        if clamped_ms == 0 {
            SyncDecision::Display
        } else {
            SyncDecision::Wait {
                duration: Duration::from_millis(clamped_ms),
            }
        }
    }

    /// The configured repeat threshold (design hook, spec §4.7; the
    /// scheduler currently just sleeps instead of repeating frames).
    pub fn repeat_threshold(&self) -> Duration {
        self.repeat_threshold
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
