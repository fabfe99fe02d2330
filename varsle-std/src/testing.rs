//! Testing utilities for Varsle.
//!
//! This module provides reusable test doubles for hubs, observers, and
//! behaviors.
//!
//! # Features
//!
//! - [`RecordingObserver`]: an observer that records every snapshot it receives
//! - [`FailingObserver`]: an observer that always fails, for exercising delivery policies
//! - [`RecordingBehavior`]: a behavior returning a fixed effect that counts invocations
//! - [`FailingBehavior`]: a behavior that always fails

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use varsle_core::{Behavior, BoxError, Effect, Observer, Snapshot};

// ============================================================================
// Recording Observer
// ============================================================================

/// An observer that records every snapshot it receives.
///
/// Clones share the same recording, so a clone can be registered with a hub
/// while the original is kept for assertions.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingObserver::new();
/// hub.register(recorder.clone().shared());
///
/// hub.set_state(readings)?;
///
/// assert_eq!(recorder.count(), 1);
/// ```
pub struct RecordingObserver<S> {
    snapshots: Arc<Mutex<Vec<S>>>,
}

impl<S> RecordingObserver<S> {
    /// Create a new recording observer.
    pub fn new() -> Self {
        Self {
            snapshots: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded snapshots.
    pub fn snapshots(&self) -> Vec<S>
    where
        S: Clone,
    {
        self.snapshots.lock().unwrap().clone()
    }

    /// Get the number of recorded snapshots.
    pub fn count(&self) -> usize {
        self.snapshots.lock().unwrap().len()
    }

    /// Clear all recorded snapshots.
    pub fn clear(&self) {
        self.snapshots.lock().unwrap().clear();
    }
}

impl<S> Default for RecordingObserver<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for RecordingObserver<S> {
    fn clone(&self) -> Self {
        Self {
            snapshots: self.snapshots.clone(),
        }
    }
}

impl<S: Snapshot> Observer<S> for RecordingObserver<S> {
    fn notify(&self, snapshot: &S) -> Result<(), BoxError> {
        self.snapshots.lock().unwrap().push(snapshot.clone());
        Ok(())
    }
}

// ============================================================================
// Failing Observer
// ============================================================================

/// An observer that fails on every notification.
///
/// Useful for verifying how a delivery policy treats a misbehaving observer.
pub struct FailingObserver {
    message: String,
}

impl FailingObserver {
    /// Create a failing observer with the given error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<S: Snapshot> Observer<S> for FailingObserver {
    fn notify(&self, _snapshot: &S) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}

// ============================================================================
// Recording Behavior
// ============================================================================

/// A behavior that returns a fixed effect and counts invocations.
///
/// Clones share the same counter, so a clone can be bound to a slot while
/// the original is kept for assertions.
pub struct RecordingBehavior<E> {
    effect: E,
    count: Arc<AtomicUsize>,
}

impl<E> RecordingBehavior<E> {
    /// Create a behavior producing the given effect.
    pub fn new(effect: E) -> Self {
        Self {
            effect,
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the number of times the behavior was performed.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<E: Clone> Clone for RecordingBehavior<E> {
    fn clone(&self) -> Self {
        Self {
            effect: self.effect.clone(),
            count: self.count.clone(),
        }
    }
}

impl<E: Effect + Clone + Sync> Behavior<E> for RecordingBehavior<E> {
    fn perform(&self) -> Result<E, BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(self.effect.clone())
    }
}

// ============================================================================
// Failing Behavior
// ============================================================================

/// A behavior that fails on every invocation.
pub struct FailingBehavior {
    message: String,
}

impl FailingBehavior {
    /// Create a failing behavior with the given error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<E: Effect> Behavior<E> for FailingBehavior {
    fn perform(&self) -> Result<E, BoxError> {
        Err(self.message.clone().into())
    }
}
