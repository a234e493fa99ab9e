//! Cancellation predicate shared by every blocking queue wait.
//!
//! Spec §5: "every blocking wait takes a cancellation predicate
//! (`ShouldStop || ShouldPause`) so no wait can outlive a lifecycle
//! transition by more than its polling interval (≤100 ms)".

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// How often a blocking queue wait re-checks its cancellation predicate.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A shared stop/pause flag pair consulted by every bounded queue wait.
///
/// Cloning an instance shares the same underlying flags (cheap `Arc`
/// clone), so the Playback Controller can hand the same token to every
/// worker task.
#[derive(Clone, Default)]
pub struct CancellationToken {
    stopped: Arc<AtomicBool>,
    paused: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a fresh, not-stopped, not-paused token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that all holders stop; irreversible for this token instance.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// Requests that producers/consumers pause their blocking waits.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    /// Clears the pause flag.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
    }

    /// Whether `stop` has been called.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Whether `pause` has been called without a matching `resume`.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    /// The combined predicate every blocking wait polls:
    /// `ShouldStop || ShouldPause`.
    pub fn should_cancel(&self) -> bool {
        self.is_stopped() || self.is_paused()
    }
}
