//! Session registry: creation, lookup, and destruction.

use crate::session::MediaSession;
use mediacore_shared_types::{MediaError, MediaSessionConfig, PlayerState, SessionId};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Manages the set of live media sessions.
///
/// A single-player front end (`mediacore-media_engine`) only ever holds
/// one entry; the registry shape is kept from the teacher's multi-tab
/// manager because nothing about session lookup/destruction is
/// single-player-specific.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<SessionId, Arc<MediaSession>>>,
}

impl SessionManager {
    /// Creates an empty session manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new session in [`PlayerState::Idle`] and returns its id.
    ///
    /// `config` is accepted for parity with the engine's session-open call
    /// but is not yet consulted here; hardware/low-latency preferences are
    /// applied by the components the engine wires up (decoders, pipeline).
    pub fn create(&self, _config: MediaSessionConfig) -> Result<SessionId, MediaError> {
        let id = SessionId::new();
        self.sessions.write().insert(id, Arc::new(MediaSession::new(id)));
        Ok(id)
    }

    /// Looks up a session by id.
    pub fn get(&self, id: SessionId) -> Option<Arc<MediaSession>> {
        self.sessions.read().get(&id).cloned()
    }

    /// Removes a session from the registry.
    pub fn destroy(&self, id: SessionId) -> Result<(), MediaError> {
        self.sessions.write().remove(&id);
        Ok(())
    }

    /// Validates and applies a state transition for `id`.
    pub fn transition_state(&self, id: SessionId, next: PlayerState) -> Result<(), MediaError> {
        let session = self
            .get(id)
            .ok_or_else(|| MediaError::InvalidParam(format!("no such session: {id}")))?;
        session.transition_to(next)
    }

    /// Reads the current state for `id`.
    pub fn get_state(&self, id: SessionId) -> Result<PlayerState, MediaError> {
        let session = self
            .get(id)
            .ok_or_else(|| MediaError::InvalidParam(format!("no such session: {id}")))?;
        Ok(session.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_session_starts_idle() {
        let manager = SessionManager::new();
        let id = manager.create(MediaSessionConfig::default()).unwrap();
        assert_eq!(manager.get_state(id).unwrap(), PlayerState::Idle);
    }

    #[test]
    fn destroy_removes_the_session() {
        let manager = SessionManager::new();
        let id = manager.create(MediaSessionConfig::default()).unwrap();
        manager.destroy(id).unwrap();
        assert!(manager.get(id).is_none());
    }

    #[test]
    fn transition_on_unknown_session_errors() {
        let manager = SessionManager::new();
        let result = manager.transition_state(SessionId::new(), PlayerState::Opening);
        assert!(matches!(result, Err(MediaError::InvalidParam(_))));
    }

    #[test]
    fn transition_state_validates_the_fsm() {
        let manager = SessionManager::new();
        let id = manager.create(MediaSessionConfig::default()).unwrap();
        assert!(manager.transition_state(id, PlayerState::Playing).is_err());
        manager.transition_state(id, PlayerState::Opening).unwrap();
        assert_eq!(manager.get_state(id).unwrap(), PlayerState::Opening);
    }
}
