//! Bounded blocking queue shared by exactly one producer and one consumer
//! (spec §4.5/§4.6/§5: the video frame queue, the resampled-audio queue,
//! and both packet queues are all instances of this type).

use crate::cancel::{CancellationToken, POLL_INTERVAL};
use crate::error::BufferError;
use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;
use std::sync::Arc;

struct Inner<T> {
    items: Mutex<VecDeque<T>>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
}

/// A bounded FIFO queue whose push/pop block under backpressure.
///
/// Every blocking wait re-checks a [`CancellationToken`] at
/// [`crate::cancel::POLL_INTERVAL`] so a stop or pause transition is
/// observed promptly rather than after an unbounded wait (spec §5).
///
/// # Examples
///
/// ```
/// use mediacore_buffer_manager::{BoundedQueue, CancellationToken};
///
/// let queue: BoundedQueue<u32> = BoundedQueue::new(4);
/// let token = CancellationToken::new();
/// queue.push_blocking(1, &token).unwrap();
/// assert_eq!(queue.pop_blocking(&token).unwrap(), Some(1));
/// ```
pub struct BoundedQueue<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for BoundedQueue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> BoundedQueue<T> {
    /// Creates a queue with the given capacity. Capacity zero means every
    /// push blocks until a consumer is ready to pop immediately.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                items: Mutex::new(VecDeque::with_capacity(capacity.min(4096))),
                not_full: Condvar::new(),
                not_empty: Condvar::new(),
                capacity,
            }),
        }
    }

    /// The queue's declared capacity.
    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    /// Current number of queued items.
    pub fn len(&self) -> usize {
        self.inner.items.lock().len()
    }

    /// Whether the queue currently holds no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pushes `item`, blocking while the queue is full.
    ///
    /// Returns [`BufferError::Cancelled`] if `token.should_cancel()` becomes
    /// true while waiting for space.
    pub fn push_blocking(&self, item: T, token: &CancellationToken) -> Result<(), BufferError> {
        let mut items = self.inner.items.lock();
        while items.len() >= self.inner.capacity {
            if token.should_cancel() {
                return Err(BufferError::Cancelled);
            }
            self.inner.not_full.wait_for(&mut items, POLL_INTERVAL);
        }
        items.push_back(item);
        self.inner.not_empty.notify_one();
        Ok(())
    }

    /// Pops the next item, blocking while the queue is empty.
    ///
    /// Returns `Ok(None)` (not an error) if cancellation interrupts the
    /// wait — this mirrors end-of-stream/shutdown draining, which is not a
    /// failure condition.
    pub fn pop_blocking(&self, token: &CancellationToken) -> Result<Option<T>, BufferError> {
        let mut items = self.inner.items.lock();
        while items.is_empty() {
            if token.should_cancel() {
                return Ok(None);
            }
            self.inner.not_empty.wait_for(&mut items, POLL_INTERVAL);
        }
        let item = items.pop_front();
        self.inner.not_full.notify_one();
        Ok(item)
    }

    /// Attempts to push without blocking; fails with
    /// [`BufferError::BufferFull`] if there is no room.
    pub fn try_push(&self, item: T) -> Result<(), BufferError> {
        let mut items = self.inner.items.lock();
        if items.len() >= self.inner.capacity {
            return Err(BufferError::BufferFull);
        }
        items.push_back(item);
        self.inner.not_empty.notify_one();
        Ok(())
    }

    /// Attempts to pop without blocking; returns `None` if empty.
    pub fn try_pop(&self) -> Option<T> {
        let mut items = self.inner.items.lock();
        let item = items.pop_front();
        if item.is_some() {
            self.inner.not_full.notify_one();
        }
        item
    }

    /// Drops every queued item, waking any blocked producer.
    ///
    /// Used by the seek protocol to clear software queues atomically
    /// (spec §4.10 step 4).
    pub fn clear(&self) {
        let mut items = self.inner.items.lock();
        items.clear();
        self.inner.not_full.notify_all();
    }
}
