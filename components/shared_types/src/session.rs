//! Player-wide finite state machine and session identity.

use std::fmt;
use uuid::Uuid;

/// Unique identifier for a player session.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a session ID from a UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration for a player session.
#[derive(Debug, Clone)]
pub struct MediaSessionConfig {
    /// Enable hardware acceleration.
    pub hardware_accel: bool,
    /// Fall back to software decode if hardware init fails.
    pub allow_hardware_fallback: bool,
    /// Maximum buffer size in bytes, if bounded.
    pub max_buffer_size: Option<usize>,
    /// Enable low latency mode (smaller queues, tighter clamps).
    pub low_latency: bool,
    /// Preferred video decoder, if any.
    pub preferred_video_decoder: Option<String>,
    /// Preferred audio decoder, if any.
    pub preferred_audio_decoder: Option<String>,
}

impl Default for MediaSessionConfig {
    fn default() -> Self {
        Self {
            hardware_accel: false,
            allow_hardware_fallback: true,
            max_buffer_size: None,
            low_latency: false,
            preferred_video_decoder: None,
            preferred_audio_decoder: None,
        }
    }
}

impl MediaSessionConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables hardware acceleration.
    pub fn with_hardware_accel(mut self, enabled: bool) -> Self {
        self.hardware_accel = enabled;
        self
    }

    /// Sets the maximum buffer size.
    pub fn with_max_buffer_size(mut self, size: usize) -> Self {
        self.max_buffer_size = Some(size);
        self
    }

    /// Enables low latency mode.
    pub fn with_low_latency(mut self, enabled: bool) -> Self {
        self.low_latency = enabled;
        self
    }
}

/// The overall player state machine (spec §3 `PlayerState`).
///
/// A single instance exists per player; transitions are observed by the UI
/// and by internal tasks via [`crate::traits::StateObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerState {
    /// No source loaded.
    Idle,
    /// `Open` in progress: probing the container.
    Opening,
    /// Initial queues are filling before playback can start.
    Buffering,
    /// Tasks and clock are running.
    Playing,
    /// Clock is frozen; tasks continue until queues are full.
    Paused,
    /// A seek is in flight.
    Seeking,
    /// Tasks have been cancelled and torn down.
    Stopped,
    /// A fatal error occurred; session must be reopened.
    Error,
}

impl PlayerState {
    /// Validates whether a transition to `next` is legal from `self`.
    ///
    /// Mirrors the teacher's `SessionState::can_transition_to` pattern, but
    /// generalized to the player-wide FSM in spec §3/§4.9. `Error` is
    /// reachable from every state (any fatal failure transitions there);
    /// `Seeking` is only reachable from `Playing`/`Paused` (you cannot seek
    /// a source that has not buffered).
    pub fn can_transition_to(&self, next: PlayerState) -> bool {
        use PlayerState::*;
        if matches!(next, Error) {
            return true;
        }
        matches!(
            (self, next),
            (Idle, Opening)
                | (Opening, Buffering)
                | (Opening, Idle)
                | (Buffering, Playing)
                | (Buffering, Paused)
                | (Buffering, Idle)
                | (Playing, Paused)
                | (Playing, Seeking)
                | (Playing, Stopped)
                | (Paused, Playing)
                | (Paused, Seeking)
                | (Paused, Stopped)
                | (Seeking, Playing)
                | (Seeking, Paused)
                | (Seeking, Stopped)
                | (Stopped, Idle)
                | (Error, Idle)
        )
    }
}

/// A pending random-access seek.
///
/// At most one is active; a newer request supersedes an older one by
/// `generation`, and the seek worker drains to the newest target rather
/// than honoring superseded ones (spec §4.10).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekRequest {
    /// Target position in milliseconds.
    pub target_ms: u64,
    /// Monotonically increasing counter; frames from older generations are discarded.
    pub generation: u64,
}

impl SeekRequest {
    /// Creates a new seek request at the given generation.
    pub fn new(target_ms: u64, generation: u64) -> Self {
        Self {
            target_ms,
            generation,
        }
    }
}
