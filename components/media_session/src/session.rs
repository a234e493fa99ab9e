//! A single player session: the player-wide FSM plus its observers.

use crate::state::MediaMetadata;
use mediacore_shared_types::{MediaError, PlayerState, SessionId, StateObserver};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::SystemTime;

/// A media playback session: one [`PlayerState`] FSM instance, its
/// registered observers, and the metadata gathered once the source opens.
///
/// Mirrors the teacher's `MediaSession` shape (shared state behind
/// interior mutability, cheap to clone via `Arc`), generalized from a
/// per-tab browser session to the single player-wide FSM (spec §3).
#[derive(Debug)]
pub struct MediaSession {
    /// Unique session identifier
    pub id: SessionId,
    state: Mutex<PlayerState>,
    observers: Mutex<Vec<Arc<dyn StateObserver>>>,
    metadata: RwLock<MediaMetadata>,
    /// Session creation time
    pub created_at: SystemTime,
    updated_at: RwLock<SystemTime>,
}

impl MediaSession {
    /// Creates a new session in [`PlayerState::Idle`].
    pub fn new(id: SessionId) -> Self {
        let now = SystemTime::now();
        Self {
            id,
            state: Mutex::new(PlayerState::Idle),
            observers: Mutex::new(Vec::new()),
            metadata: RwLock::new(MediaMetadata::default()),
            created_at: now,
            updated_at: RwLock::new(now),
        }
    }

    /// The current FSM state.
    pub fn state(&self) -> PlayerState {
        *self.state.lock()
    }

    /// Validates and applies a transition, notifying every observer
    /// synchronously on the caller's thread (spec §6 "state-change event").
    pub fn transition_to(&self, next: PlayerState) -> Result<(), MediaError> {
        let mut guard = self.state.lock();
        if !guard.can_transition_to(next) {
            return Err(MediaError::InvalidStateTransition {
                from: *guard,
                to: next,
            });
        }
        let old = *guard;
        *guard = next;
        drop(guard);

        *self.updated_at.write() = SystemTime::now();
        for observer in self.observers.lock().iter() {
            observer.on_state_changed(old, next);
        }
        Ok(())
    }

    /// Registers an observer of every future transition on this session.
    pub fn add_observer(&self, observer: Arc<dyn StateObserver>) {
        self.observers.lock().push(observer);
    }

    /// Current metadata snapshot.
    pub fn metadata(&self) -> MediaMetadata {
        self.metadata.read().clone()
    }

    /// Replaces the metadata snapshot (called once `Open` has probed the
    /// container).
    pub fn set_metadata(&self, metadata: MediaMetadata) {
        *self.metadata.write() = metadata;
    }

    /// The last time this session's state changed.
    pub fn updated_at(&self) -> SystemTime {
        *self.updated_at.read()
    }
}
