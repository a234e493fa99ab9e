//! The playback controller: owns the per-session worker threads, drives the
//! player-wide FSM, and runs the seek protocol (spec §4.9/§4.10).
//!
//! Each of the demuxer, the two decoders, the renderer, and the audio
//! output device is exclusively owned by exactly one worker thread for its
//! entire lifetime; every other thread reaches it only by sending a
//! [`WorkerCommand`] down that worker's channel (spec §5: "a fixed thread
//! inventory per session"). The [`Clock`] and the player [`PlayerState`]
//! are the only state genuinely shared across threads, and both sit behind
//! `parking_lot` mutexes.

use crate::sync::Clock;
use crate::types::{PipelineConfig, PlaybackStats};
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use mediacore_buffer_manager::{BoundedQueue, CancellationToken, POLL_INTERVAL};
use mediacore_shared_types::{
    AudioFrame, AudioOutput, Decoder, Demuxer, MediaError, MediaInfo, Packet, PlayerState,
    Renderer, ResampledAudioFrame, SeekRequest, StateObserver, StreamKind, VideoFrame,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;

/// A control message sent from the controller to one of its worker threads.
///
/// `Seek` carries the request so the worker can discard a superseded one by
/// comparing `generation` against the last one it applied.
enum WorkerCommand {
    Pause,
    Resume,
    Seek(SeekRequest),
    Stop,
}

fn transition(
    state: &Arc<Mutex<PlayerState>>,
    observers: &Arc<Mutex<Vec<Arc<dyn StateObserver>>>>,
    next: PlayerState,
) -> Result<(), MediaError> {
    let mut guard = state.lock();
    if !guard.can_transition_to(next) {
        return Err(MediaError::InvalidStateTransition {
            from: *guard,
            to: next,
        });
    }
    let old = *guard;
    *guard = next;
    drop(guard);
    for observer in observers.lock().iter() {
        observer.on_state_changed(old, next);
    }
    Ok(())
}

/// Orchestrates a single playback session: the demux thread, the video and
/// audio decode/render threads, the master [`Clock`], and the player FSM.
///
/// # Examples
///
/// ```no_run
/// use mediacore_media_pipeline::{PlaybackController, PipelineConfig};
///
/// # fn example(
/// #     demuxer: Box<dyn mediacore_shared_types::Demuxer>,
/// #     video_decoder: Box<dyn mediacore_shared_types::Decoder<mediacore_shared_types::VideoFrame>>,
/// #     audio_decoder: Box<dyn mediacore_shared_types::Decoder<mediacore_shared_types::AudioFrame>>,
/// #     renderer: Box<dyn mediacore_shared_types::Renderer>,
/// #     audio_output: Box<dyn mediacore_shared_types::AudioOutput>,
/// # ) -> Result<(), mediacore_shared_types::MediaError> {
/// let controller = PlaybackController::open(
///     "file:///movie.mp4",
///     demuxer,
///     video_decoder,
///     audio_decoder,
///     renderer,
///     audio_output,
///     Box::new(|frame| Err(mediacore_shared_types::MediaError::NotInitialized) /* real resampler */),
///     PipelineConfig::default(),
/// )?;
/// controller.play()?;
/// # Ok(())
/// # }
/// ```
pub struct PlaybackController {
    state: Arc<Mutex<PlayerState>>,
    observers: Arc<Mutex<Vec<Arc<dyn StateObserver>>>>,
    clock: Arc<Mutex<Clock>>,
    cancel: CancellationToken,
    generation: Arc<AtomicU64>,
    frames_dropped: Arc<AtomicU64>,
    video_packet_queue: BoundedQueue<Packet>,
    audio_packet_queue: BoundedQueue<Packet>,
    video_frame_queue: BoundedQueue<VideoFrame>,
    audio_frame_queue: BoundedQueue<ResampledAudioFrame>,
    demux_cmd: Sender<WorkerCommand>,
    video_decode_cmd: Sender<WorkerCommand>,
    video_render_cmd: Sender<WorkerCommand>,
    audio_decode_cmd: Sender<WorkerCommand>,
    audio_render_cmd: Sender<WorkerCommand>,
    demux_handle: Option<JoinHandle<()>>,
    video_decode_handle: Option<JoinHandle<()>>,
    video_render_handle: Option<JoinHandle<()>>,
    audio_decode_handle: Option<JoinHandle<()>>,
    audio_render_handle: Option<JoinHandle<()>>,
    media_info: MediaInfo,
}

impl PlaybackController {
    /// Opens `url` on `demuxer` and spawns the demux/video/audio worker
    /// threads, leaving the session in [`PlayerState::Buffering`].
    ///
    /// `resample` converts a decoded [`AudioFrame`] to the device's target
    /// format; the caller supplies it (typically backed by
    /// `mediacore-audio_output`'s `AudioResampler`) so this crate does not
    /// need to depend on a concrete resampler implementation.
    #[allow(clippy::too_many_arguments)]
    pub fn open(
        url: &str,
        mut demuxer: Box<dyn Demuxer>,
        video_decoder: Box<dyn Decoder<VideoFrame>>,
        audio_decoder: Box<dyn Decoder<AudioFrame>>,
        renderer: Box<dyn Renderer>,
        audio_output: Box<dyn AudioOutput>,
        resample: Box<dyn FnMut(AudioFrame) -> Result<ResampledAudioFrame, MediaError> + Send>,
        config: PipelineConfig,
    ) -> Result<Self, MediaError> {
        let state = Arc::new(Mutex::new(PlayerState::Idle));
        let observers: Arc<Mutex<Vec<Arc<dyn StateObserver>>>> = Arc::new(Mutex::new(Vec::new()));

        transition(&state, &observers, PlayerState::Opening)?;
        let media_info = demuxer.open(url)?;
        transition(&state, &observers, PlayerState::Buffering)?;

        let clock = Arc::new(Mutex::new(Clock::new()));
        let cancel = CancellationToken::new();
        let generation = Arc::new(AtomicU64::new(0));
        let frames_dropped = Arc::new(AtomicU64::new(0));

        let video_packet_queue = BoundedQueue::new(config.packet_queue_capacity);
        let audio_packet_queue = BoundedQueue::new(config.packet_queue_capacity);
        let video_frame_queue = BoundedQueue::new(config.video_frame_queue_capacity);
        let audio_frame_queue = BoundedQueue::new(config.audio_frame_queue_capacity);

        let (demux_cmd_tx, demux_cmd_rx) = unbounded();
        let (video_decode_cmd_tx, video_decode_cmd_rx) = unbounded();
        let (video_render_cmd_tx, video_render_cmd_rx) = unbounded();
        let (audio_decode_cmd_tx, audio_decode_cmd_rx) = unbounded();
        let (audio_render_cmd_tx, audio_render_cmd_rx) = unbounded();

        let demux_handle = {
            let video_packets = video_packet_queue.clone();
            let audio_packets = audio_packet_queue.clone();
            let cancel = cancel.clone();
            thread::Builder::new()
                .name("mediacore-demux".to_string())
                .spawn(move || run_demux(demuxer, video_packets, audio_packets, demux_cmd_rx, cancel))
                .map_err(|e| MediaError::ThreadError(e.to_string()))?
        };

        let video_decode_handle = {
            let packets = video_packet_queue.clone();
            let frames = video_frame_queue.clone();
            let cancel = cancel.clone();
            thread::Builder::new()
                .name("mediacore-video-decode".to_string())
                .spawn(move || run_video_decode(video_decoder, packets, frames, video_decode_cmd_rx, cancel))
                .map_err(|e| MediaError::ThreadError(e.to_string()))?
        };

        let video_render_handle = {
            let frames = video_frame_queue.clone();
            let cancel = cancel.clone();
            let clock = Arc::clone(&clock);
            let frames_dropped = Arc::clone(&frames_dropped);
            thread::Builder::new()
                .name("mediacore-video-render".to_string())
                .spawn(move || {
                    run_video_render(renderer, frames, video_render_cmd_rx, cancel, clock, frames_dropped)
                })
                .map_err(|e| MediaError::ThreadError(e.to_string()))?
        };

        let audio_decode_handle = {
            let packets = audio_packet_queue.clone();
            let frames = audio_frame_queue.clone();
            let cancel = cancel.clone();
            thread::Builder::new()
                .name("mediacore-audio-decode".to_string())
                .spawn(move || {
                    run_audio_decode(audio_decoder, resample, packets, frames, audio_decode_cmd_rx, cancel)
                })
                .map_err(|e| MediaError::ThreadError(e.to_string()))?
        };

        let audio_render_handle = {
            let frames = audio_frame_queue.clone();
            let cancel = cancel.clone();
            let clock = Arc::clone(&clock);
            thread::Builder::new()
                .name("mediacore-audio-render".to_string())
                .spawn(move || run_audio_render(audio_output, frames, audio_render_cmd_rx, cancel, clock))
                .map_err(|e| MediaError::ThreadError(e.to_string()))?
        };

        Ok(Self {
            state,
            observers,
            clock,
            cancel,
            generation,
            frames_dropped,
            video_packet_queue,
            audio_packet_queue,
            video_frame_queue,
            audio_frame_queue,
            demux_cmd: demux_cmd_tx,
            video_decode_cmd: video_decode_cmd_tx,
            video_render_cmd: video_render_cmd_tx,
            audio_decode_cmd: audio_decode_cmd_tx,
            audio_render_cmd: audio_render_cmd_tx,
            demux_handle: Some(demux_handle),
            video_decode_handle: Some(video_decode_handle),
            video_render_handle: Some(video_render_handle),
            audio_decode_handle: Some(audio_decode_handle),
            audio_render_handle: Some(audio_render_handle),
            media_info,
        })
    }

    fn transition(&self, next: PlayerState) -> Result<(), MediaError> {
        transition(&self.state, &self.observers, next)
    }

    /// Registers an observer of every future FSM transition.
    pub fn add_observer(&self, observer: Arc<dyn StateObserver>) {
        self.observers.lock().push(observer);
    }

    /// The current player state.
    pub fn state(&self) -> PlayerState {
        *self.state.lock()
    }

    /// Stream and duration information gathered when the source was opened.
    pub fn media_info(&self) -> &MediaInfo {
        &self.media_info
    }

    /// Starts or resumes playback from [`PlayerState::Buffering`] or
    /// [`PlayerState::Paused`].
    pub fn play(&self) -> Result<(), MediaError> {
        self.transition(PlayerState::Playing)?;
        self.clock.lock().resume();
        self.cancel.resume();
        let _ = self.video_decode_cmd.send(WorkerCommand::Resume);
        let _ = self.video_render_cmd.send(WorkerCommand::Resume);
        let _ = self.audio_decode_cmd.send(WorkerCommand::Resume);
        let _ = self.audio_render_cmd.send(WorkerCommand::Resume);
        Ok(())
    }

    /// Freezes the clock and pauses every decode/render/submit worker
    /// without tearing down any thread (spec §4.7 pause/resume semantics).
    /// Decode workers also observe the pause so they never race a paused
    /// frame queue's blocking push against the shared cancellation token.
    pub fn pause(&self) -> Result<(), MediaError> {
        self.transition(PlayerState::Paused)?;
        self.clock.lock().pause();
        self.cancel.pause();
        let _ = self.video_decode_cmd.send(WorkerCommand::Pause);
        let _ = self.video_render_cmd.send(WorkerCommand::Pause);
        let _ = self.audio_decode_cmd.send(WorkerCommand::Pause);
        let _ = self.audio_render_cmd.send(WorkerCommand::Pause);
        Ok(())
    }

    /// Requests a seek to `target_ms`, running the spec §4.10 protocol on a
    /// dedicated seek worker thread so the caller never blocks.
    pub fn seek(&self, target_ms: u64) -> Result<(), MediaError> {
        let previous = *self.state.lock();
        if !matches!(previous, PlayerState::Playing | PlayerState::Paused) {
            return Err(MediaError::InvalidStateTransition {
                from: previous,
                to: PlayerState::Seeking,
            });
        }
        self.transition(PlayerState::Seeking)?;

        // Step 9 happens inside the demux worker; the generation counter
        // (step 10) is bumped here so every worker agrees on which request
        // is newest even if they apply it at slightly different times.
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let request = SeekRequest::new(target_ms, generation);

        // Step 2: pause audio/video so their blocking queue waits return.
        self.cancel.pause();
        // Step 7: re-establish clock normalization from the seek target.
        self.clock.lock().reset_for_seek(target_ms as i64);

        // Steps 3-6, 8-9: each worker flushes/clears/seeks the resource it
        // exclusively owns when it dequeues this command.
        let _ = self.demux_cmd.send(WorkerCommand::Seek(request));
        let _ = self.video_decode_cmd.send(WorkerCommand::Seek(request));
        let _ = self.video_render_cmd.send(WorkerCommand::Seek(request));
        let _ = self.audio_decode_cmd.send(WorkerCommand::Seek(request));
        let _ = self.audio_render_cmd.send(WorkerCommand::Seek(request));

        let state = Arc::clone(&self.state);
        let observers = Arc::clone(&self.observers);
        let cancel = self.cancel.clone();
        thread::Builder::new()
            .name("mediacore-seek".to_string())
            .spawn(move || {
                // A production seek worker would wait for acknowledgements
                // from each thread; this gives them one poll interval to
                // drain their command channel before resuming.
                thread::sleep(POLL_INTERVAL);
                cancel.resume();
                // Step 11: restore the state the session was in before the seek.
                let _ = transition(&state, &observers, previous);
            })
            .map_err(|e| MediaError::ThreadError(e.to_string()))?;

        Ok(())
    }

    /// Stops playback and joins every worker thread.
    pub fn stop(&mut self) -> Result<(), MediaError> {
        self.transition(PlayerState::Stopped)?;
        self.shut_down_workers();
        Ok(())
    }

    fn shut_down_workers(&mut self) {
        self.cancel.stop();
        let _ = self.demux_cmd.send(WorkerCommand::Stop);
        let _ = self.video_decode_cmd.send(WorkerCommand::Stop);
        let _ = self.video_render_cmd.send(WorkerCommand::Stop);
        let _ = self.audio_decode_cmd.send(WorkerCommand::Stop);
        let _ = self.audio_render_cmd.send(WorkerCommand::Stop);
        if let Some(handle) = self.demux_handle.take() {
            let _ = handle.join();
        }
        if let Some(handle) = self.video_decode_handle.take() {
            let _ = handle.join();
        }
        if let Some(handle) = self.video_render_handle.take() {
            let _ = handle.join();
        }
        if let Some(handle) = self.audio_decode_handle.take() {
            let _ = handle.join();
        }
        if let Some(handle) = self.audio_render_handle.take() {
            let _ = handle.join();
        }
    }

    /// A point-in-time snapshot of clock and queue state, for UI polling.
    pub fn stats(&self) -> PlaybackStats {
        let clock = self.clock.lock();
        PlaybackStats {
            state: self.state(),
            master_clock_ms: clock.master_clock_ms(),
            smoothed_drift_ms: clock.smoothed_drift_ms(),
            video_packet_queue_len: self.video_packet_queue.len(),
            audio_packet_queue_len: self.audio_packet_queue.len(),
            video_frame_queue_len: self.video_frame_queue.len(),
            audio_frame_queue_len: self.audio_frame_queue.len(),
            frames_dropped: self.frames_dropped.load(Ordering::Relaxed),
        }
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.shut_down_workers();
    }
}

fn run_demux(
    mut demuxer: Box<dyn Demuxer>,
    video_packets: BoundedQueue<Packet>,
    audio_packets: BoundedQueue<Packet>,
    cmd_rx: Receiver<WorkerCommand>,
    cancel: CancellationToken,
) {
    let mut last_generation = 0u64;
    loop {
        match cmd_rx.try_recv() {
            Ok(WorkerCommand::Stop) => return,
            Ok(WorkerCommand::Seek(req)) if req.generation > last_generation => {
                last_generation = req.generation;
                video_packets.clear();
                audio_packets.clear();
                if let Err(e) = demuxer.seek(req.target_ms, true) {
                    tracing::warn!("demuxer seek to {}ms failed: {e}", req.target_ms);
                }
                continue;
            }
            Ok(_) => continue,
            Err(TryRecvError::Disconnected) => return,
            Err(TryRecvError::Empty) => {}
        }
        if cancel.is_stopped() {
            return;
        }
        match demuxer.read_packet() {
            Ok(Some(packet)) => {
                let queue = match packet.stream {
                    StreamKind::Video => &video_packets,
                    StreamKind::Audio => &audio_packets,
                };
                if queue.push_blocking(packet, &cancel).is_err() {
                    return;
                }
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                tracing::error!("demux error: {e}");
                return;
            }
        }
    }
}

/// Decodes video packets into the frame queue consumed by
/// [`run_video_render`]; owns the decoder exclusively (spec §4.6: the queue
/// decouples decode from the render loop's own pacing).
fn run_video_decode(
    mut decoder: Box<dyn Decoder<VideoFrame>>,
    packets: BoundedQueue<Packet>,
    frames_out: BoundedQueue<VideoFrame>,
    cmd_rx: Receiver<WorkerCommand>,
    cancel: CancellationToken,
) {
    let mut last_generation = 0u64;
    loop {
        match cmd_rx.try_recv() {
            Ok(WorkerCommand::Stop) => return,
            Ok(WorkerCommand::Seek(req)) if req.generation > last_generation => {
                last_generation = req.generation;
                let _ = decoder.flush();
                frames_out.clear();
                continue;
            }
            Ok(_) => continue,
            Err(TryRecvError::Disconnected) => return,
            Err(TryRecvError::Empty) => {}
        }
        if cancel.is_stopped() {
            return;
        }
        if cancel.is_paused() {
            thread::sleep(POLL_INTERVAL);
            continue;
        }

        let packet = match packets.pop_blocking(&cancel) {
            Ok(Some(packet)) => packet,
            Ok(None) => continue,
            Err(_) => return,
        };
        if decoder.send_packet(&packet).is_err() {
            continue;
        }
        let mut frames = Vec::new();
        if decoder.receive_pending_frames(&mut frames).is_err() {
            continue;
        }
        for frame in frames {
            if frames_out.push_blocking(frame, &cancel).is_err() {
                return;
            }
        }
    }
}

/// The Video Player's render loop (spec §4.6): pulls decoded frames from the
/// queue [`run_video_decode`] fills, paces them against the master
/// [`Clock`], and drives the [`Renderer`].
fn run_video_render(
    mut renderer: Box<dyn Renderer>,
    frames: BoundedQueue<VideoFrame>,
    cmd_rx: Receiver<WorkerCommand>,
    cancel: CancellationToken,
    clock: Arc<Mutex<Clock>>,
    frames_dropped: Arc<AtomicU64>,
) {
    use crate::types::SyncDecision;

    let mut last_generation = 0u64;
    loop {
        match cmd_rx.try_recv() {
            Ok(WorkerCommand::Stop) => return,
            Ok(WorkerCommand::Seek(req)) if req.generation > last_generation => {
                last_generation = req.generation;
                let _ = renderer.clear_caches();
                continue;
            }
            Ok(_) => continue,
            Err(TryRecvError::Disconnected) => return,
            Err(TryRecvError::Empty) => {}
        }
        if cancel.is_stopped() {
            return;
        }
        if cancel.is_paused() {
            thread::sleep(POLL_INTERVAL);
            continue;
        }

        let frame = match frames.pop_blocking(&cancel) {
            Ok(Some(frame)) => frame,
            Ok(None) => continue,
            Err(_) => return,
        };

        loop {
            let decision = clock.lock().sync_video_frame(frame.pts_ms);
            match decision {
                SyncDecision::Drop => {
                    frames_dropped.fetch_add(1, Ordering::Relaxed);
                    break;
                }
                SyncDecision::Wait { duration } => {
                    thread::sleep(duration);
                }
                SyncDecision::Display => {
                    if renderer.render_frame(&frame).is_ok() {
                        let _ = renderer.present();
                        clock.lock().update_video(frame.pts_ms);
                    }
                    break;
                }
            }
        }
    }
}

/// Decodes and resamples audio packets into the queue consumed by
/// [`run_audio_render`]; owns both the decoder and the resampler closure
/// exclusively (spec §4.4/§4.5).
fn run_audio_decode(
    mut decoder: Box<dyn Decoder<AudioFrame>>,
    mut resample: Box<dyn FnMut(AudioFrame) -> Result<ResampledAudioFrame, MediaError> + Send>,
    packets: BoundedQueue<Packet>,
    frames_out: BoundedQueue<ResampledAudioFrame>,
    cmd_rx: Receiver<WorkerCommand>,
    cancel: CancellationToken,
) {
    let mut last_generation = 0u64;
    loop {
        match cmd_rx.try_recv() {
            Ok(WorkerCommand::Stop) => return,
            Ok(WorkerCommand::Seek(req)) if req.generation > last_generation => {
                last_generation = req.generation;
                let _ = decoder.flush();
                frames_out.clear();
                continue;
            }
            Ok(_) => continue,
            Err(TryRecvError::Disconnected) => return,
            Err(TryRecvError::Empty) => {}
        }
        if cancel.is_stopped() {
            return;
        }
        if cancel.is_paused() {
            thread::sleep(POLL_INTERVAL);
            continue;
        }

        let packet = match packets.pop_blocking(&cancel) {
            Ok(Some(packet)) => packet,
            Ok(None) => continue,
            Err(_) => return,
        };
        if decoder.send_packet(&packet).is_err() {
            continue;
        }
        let mut frames = Vec::new();
        if decoder.receive_pending_frames(&mut frames).is_err() {
            continue;
        }

        for frame in frames {
            match resample(frame) {
                Ok(resampled) => {
                    if frames_out.push_blocking(resampled, &cancel).is_err() {
                        return;
                    }
                }
                Err(e) => tracing::warn!("resample failed: {e}"),
            }
        }
    }
}

/// The Audio Player's submit loop (spec §4.5): pulls resampled frames from
/// the queue [`run_audio_decode`] fills, hands each to the output device,
/// and drives the master [`Clock`] from the audio side.
fn run_audio_render(
    mut audio_output: Box<dyn AudioOutput>,
    frames: BoundedQueue<ResampledAudioFrame>,
    cmd_rx: Receiver<WorkerCommand>,
    cancel: CancellationToken,
    clock: Arc<Mutex<Clock>>,
) {
    let mut last_generation = 0u64;
    loop {
        match cmd_rx.try_recv() {
            Ok(WorkerCommand::Stop) => return,
            Ok(WorkerCommand::Seek(req)) if req.generation > last_generation => {
                last_generation = req.generation;
                let _ = audio_output.flush();
                continue;
            }
            Ok(_) => continue,
            Err(TryRecvError::Disconnected) => return,
            Err(TryRecvError::Empty) => {}
        }
        if cancel.is_stopped() {
            return;
        }
        if cancel.is_paused() {
            thread::sleep(POLL_INTERVAL);
            continue;
        }

        let resampled = match frames.pop_blocking(&cancel) {
            Ok(Some(resampled)) => resampled,
            Ok(None) => continue,
            Err(_) => return,
        };
        let pts_ms = resampled.pts_ms;
        if audio_output.submit(resampled).is_err() {
            return;
        }
        clock.lock().update_audio(pts_ms);
    }
}
