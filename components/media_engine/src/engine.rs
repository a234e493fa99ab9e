//! The single-session [`Player`] facade: wires the demuxer, decoders,
//! hardware context, audio output, and video renderer into one
//! [`PlaybackController`] per open source (spec §3/§4.9).

use mediacore_audio_decoders::DecoderFactory as AudioDecoderFactory;
use mediacore_audio_output::{AudioPlayer, AudioResampler};
use mediacore_format_parsers::MediaDemuxer;
use mediacore_hardware_accel::HwDeviceContext;
use mediacore_media_pipeline::{PlaybackController, PlaybackStats};
use mediacore_media_session::{MediaMetadata, MediaSession, SessionManager};
use mediacore_shared_types::{
    AudioOutput, Decoder, Demuxer, MediaError, MediaInfo, PlayerState, SessionId, StateObserver,
    VideoFrame, VideoTrackInfo,
};
use mediacore_video_decoders::{DecoderFactory as VideoDecoderFactory, HardwareVideoDecoder};
use mediacore_video_renderer::{HardwareRenderer, Renderer, RendererProxy, SoftwareRenderer};
use std::sync::Arc;
use tracing::{info, warn};

use crate::types::PlayerConfig;

/// Mirrors a [`PlaybackController`]'s FSM transitions onto the
/// [`MediaSession`] that represents it, so UI code only ever needs to
/// observe the session rather than reach into the pipeline crate.
struct SessionStateMirror(Arc<MediaSession>);

impl StateObserver for SessionStateMirror {
    fn on_state_changed(&self, _old_state: PlayerState, new_state: PlayerState) {
        if let Err(err) = self.0.transition_to(new_state) {
            warn!(%err, "session FSM rejected a mirrored pipeline transition");
        }
    }
}

/// A single-session media player.
///
/// One `Player` opens at most one source at a time; `open` while a source
/// is already active returns `MediaError::AlreadyRunning`. The
/// [`SessionManager`] is kept as a registry of one because nothing about
/// session lookup or destruction is single-player-specific, and because
/// the component already speaks that API (spec §3: "one FSM instance for
/// the whole process").
pub struct Player {
    config: PlayerConfig,
    sessions: SessionManager,
    session_id: Option<SessionId>,
    media_info: Option<MediaInfo>,
    controller: Option<PlaybackController>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl Player {
    /// Creates a player with no source loaded.
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            config,
            sessions: SessionManager::new(),
            session_id: None,
            media_info: None,
            controller: None,
        }
    }

    /// The active session's id, if a source has been opened.
    pub fn session_id(&self) -> Option<SessionId> {
        self.session_id
    }

    /// Media information gathered when the current source was opened.
    pub fn media_info(&self) -> Option<&MediaInfo> {
        self.media_info.as_ref()
    }

    /// The player FSM's current state.
    pub fn state(&self) -> PlayerState {
        self.controller
            .as_ref()
            .map(PlaybackController::state)
            .unwrap_or(PlayerState::Idle)
    }

    /// A point-in-time snapshot of queue depths and clock drift, for UI
    /// polling (spec §4.7). `None` before a source has been opened.
    pub fn stats(&self) -> Option<PlaybackStats> {
        self.controller.as_ref().map(PlaybackController::stats)
    }

    /// Registers an observer of every future FSM transition on the active
    /// session.
    ///
    /// # Errors
    ///
    /// `MediaError::NotInitialized` if no source has been opened yet.
    pub fn add_observer(&self, observer: Arc<dyn StateObserver>) -> Result<(), MediaError> {
        let controller = self.controller.as_ref().ok_or(MediaError::NotInitialized)?;
        controller.add_observer(observer);
        Ok(())
    }

    /// Opens `url`, builds the decode/render/output stack for whichever
    /// codecs its container reports, and starts buffering (spec §4.1
    /// through §4.9).
    ///
    /// Exactly one active video and one active audio track are required;
    /// a source with neither is rejected with `MediaError::StreamNotFound`
    /// (multi-track and subtitle selection are out of scope, spec
    /// Non-goals).
    ///
    /// # Errors
    ///
    /// `MediaError::AlreadyRunning` if a source is already open; any demux,
    /// decoder, or device error the opening sequence hits otherwise.
    pub fn open(&mut self, url: &str) -> Result<MediaInfo, MediaError> {
        if self.controller.is_some() {
            return Err(MediaError::AlreadyRunning);
        }

        let session_id = self.sessions.create(self.config.session.clone())?;
        let session = self.sessions.get(session_id).expect("just created");

        match self.open_inner(url, &session) {
            Ok(media_info) => {
                self.session_id = Some(session_id);
                self.media_info = Some(media_info.clone());
                Ok(media_info)
            }
            Err(err) => {
                let _ = session.transition_to(PlayerState::Error);
                let _ = self.sessions.destroy(session_id);
                Err(err)
            }
        }
    }

    fn open_inner(&mut self, url: &str, session: &Arc<MediaSession>) -> Result<MediaInfo, MediaError> {
        session.transition_to(PlayerState::Opening)?;

        let mut demuxer = MediaDemuxer::new();
        let probe_info = demuxer.open(url)?;

        let video_track = probe_info
            .video_tracks
            .first()
            .ok_or_else(|| MediaError::StreamNotFound("no video track".to_string()))?
            .clone();
        let audio_track = probe_info
            .audio_tracks
            .first()
            .ok_or_else(|| MediaError::StreamNotFound("no audio track".to_string()))?
            .clone();

        session.set_metadata(MediaMetadata {
            title: probe_info.title.clone(),
            artist: None,
            album: None,
            duration: probe_info.duration.unwrap_or_default(),
            video_track_count: probe_info.video_tracks.len(),
            audio_track_count: probe_info.audio_tracks.len(),
        });

        let (video_decoder, hardware_rendering) = self.build_video_decoder(&video_track)?;
        let renderer: Box<dyn Renderer> = if hardware_rendering {
            Box::new(RendererProxy::new(Box::new(HardwareRenderer::new())))
        } else {
            Box::new(RendererProxy::new(Box::new(SoftwareRenderer::new())))
        };

        let audio_decoder = AudioDecoderFactory::create_decoder(audio_track.codec.clone())?;

        let mut audio_output = AudioPlayer::new();
        audio_output.init(audio_track.sample_rate, audio_track.channels, 32, 4096)?;

        let mut resampler = AudioResampler::new(audio_track.sample_rate, audio_track.channels);
        let resample = Box::new(move |frame| resampler.process(frame).map_err(MediaError::from));

        session.transition_to(PlayerState::Buffering)?;

        let controller = PlaybackController::open(
            url,
            Box::new(demuxer),
            video_decoder,
            audio_decoder,
            renderer,
            Box::new(audio_output),
            resample,
            self.config.pipeline,
        )?;

        controller.add_observer(Arc::new(SessionStateMirror(Arc::clone(session))));
        info!(%url, "opened media source");
        self.controller = Some(controller);
        Ok(probe_info)
    }

    /// Builds a decoder for `track`, attempting the hardware path first
    /// when `hardware_accel` is set (spec §4.2/§4.3 hardware-path
    /// fallback), falling back to software when hardware is disabled,
    /// unavailable, or the codec is unsupported.
    ///
    /// Returns whether the hardware path was chosen, so the caller can
    /// pick a matching renderer backend.
    fn build_video_decoder(
        &self,
        track: &VideoTrackInfo,
    ) -> Result<(Box<dyn Decoder<VideoFrame>>, bool), MediaError> {
        if !self.config.session.hardware_accel {
            return Ok((VideoDecoderFactory::create_decoder(track.codec.clone())?, false));
        }

        match HwDeviceContext::initialize(&track.codec, track.width, track.height) {
            Ok(ctx) => {
                let decoder = HardwareVideoDecoder::with_context(
                    ctx.into_shared(),
                    track.codec.clone(),
                    track.width,
                    track.height,
                );
                Ok((Box::new(decoder), true))
            }
            Err(err) if self.config.session.allow_hardware_fallback => {
                warn!(%err, "hardware context unavailable, falling back to software decode");
                Ok((VideoDecoderFactory::create_decoder(track.codec.clone())?, false))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Starts or resumes playback.
    pub fn play(&self) -> Result<(), MediaError> {
        self.controller.as_ref().ok_or(MediaError::NotInitialized)?.play()
    }

    /// Pauses playback without tearing down any worker thread.
    pub fn pause(&self) -> Result<(), MediaError> {
        self.controller.as_ref().ok_or(MediaError::NotInitialized)?.pause()
    }

    /// Requests a seek to `target_ms`, returning once the request has been
    /// accepted; the seek itself completes asynchronously (spec §4.10).
    pub fn seek(&self, target_ms: u64) -> Result<(), MediaError> {
        self.controller.as_ref().ok_or(MediaError::NotInitialized)?.seek(target_ms)
    }

    /// Stops playback, tears down the worker threads, and releases the
    /// active session.
    pub fn stop(&mut self) -> Result<(), MediaError> {
        let mut controller = self.controller.take().ok_or(MediaError::NotInitialized)?;
        let result = controller.stop();
        if let Some(id) = self.session_id.take() {
            let _ = self.sessions.destroy(id);
        }
        self.media_info = None;
        result
    }
}
