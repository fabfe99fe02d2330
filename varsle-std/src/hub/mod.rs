//! # Notification Hub (Subject)
//!
//! The standard [`Subject`] implementation: an ordered observer collection
//! plus a current state snapshot, fanned out synchronously on every update.
//!
//! # Ordering and identity
//!
//! - Insertion order defines notification order.
//! - Observers are identified by `Arc` allocation; [`Hub::unregister`]
//!   removes every occurrence of that allocation.
//! - Registration is not deduplicated: registering the same `Arc` twice
//!   means two notifications per update until it is unregistered.
//!
//! # Pass semantics
//!
//! Each pass works on a snapshot of the observer list taken when the pass
//! starts, so mutation of the collection only ever affects subsequent
//! passes. The fan-out runs on the caller's thread to completion before
//! `set_state` returns; nothing suspends or retries.

mod delivery;

pub use delivery::{DeliveryPolicy, FailFast, Isolated};

use std::sync::Arc;
use varsle_core::{NotifyError, Observer, Snapshot, Subject};

/// A subject broadcasting state snapshots to registered observers.
///
/// `D` selects the failure policy for a notification pass; the default
/// [`Isolated`] policy attempts every observer and reports failures
/// collectively, per the recommended handling for misbehaving observers.
pub struct Hub<S: Snapshot, D: DeliveryPolicy = Isolated> {
    observers: Vec<Arc<dyn Observer<S>>>,
    state: Option<S>,
    policy: D,
}

impl<S: Snapshot> Hub<S> {
    /// Create an empty hub with the default [`Isolated`] policy.
    pub fn new() -> Self {
        Self::with_policy(Isolated)
    }
}

impl<S: Snapshot> Default for Hub<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Snapshot, D: DeliveryPolicy> Hub<S, D> {
    /// Create an empty hub with an explicit delivery policy.
    pub fn with_policy(policy: D) -> Self {
        Self {
            observers: Vec::new(),
            state: None,
            policy,
        }
    }

    /// The current state snapshot, if one has ever been set.
    pub fn state(&self) -> Option<&S> {
        self.state.as_ref()
    }

    /// Number of registered observer entries (duplicates counted).
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Appends `observer` to the notification order.
    ///
    /// Never triggers a notification and never affects observers that are
    /// already registered.
    pub fn register(&mut self, observer: Arc<dyn Observer<S>>) {
        self.observers.push(observer);
    }

    /// Removes all occurrences of `observer`, matched by allocation identity.
    ///
    /// A no-op when the observer was never registered.
    pub fn unregister(&mut self, observer: &Arc<dyn Observer<S>>) {
        self.observers.retain(|o| !Arc::ptr_eq(o, observer));
    }

    /// Replaces the state snapshot, then notifies every registered observer
    /// in registration order with the full new snapshot.
    pub fn set_state(&mut self, snapshot: S) -> Result<(), NotifyError> {
        self.state = Some(snapshot.clone());
        self.deliver(&snapshot)
    }

    /// Re-delivers the current snapshot to all registered observers.
    ///
    /// A no-op until the first [`set_state`](Hub::set_state).
    pub fn notify_all(&self) -> Result<(), NotifyError> {
        match &self.state {
            Some(snapshot) => self.deliver(snapshot),
            None => Ok(()),
        }
    }

    fn deliver(&self, snapshot: &S) -> Result<(), NotifyError> {
        // Pass snapshot: the list as of the start of this pass.
        let pass: Vec<Arc<dyn Observer<S>>> = self.observers.clone();
        self.policy.deliver(snapshot, pass.iter().map(|o| o.as_ref()))
    }
}

impl<S: Snapshot, D: DeliveryPolicy> Subject<S> for Hub<S, D> {
    fn register(&mut self, observer: Arc<dyn Observer<S>>) {
        Hub::register(self, observer);
    }

    fn unregister(&mut self, observer: &Arc<dyn Observer<S>>) {
        Hub::unregister(self, observer);
    }

    fn set_state(&mut self, snapshot: S) -> Result<(), NotifyError> {
        Hub::set_state(self, snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingObserver;

    #[test]
    fn starts_empty_with_no_state() {
        let hub: Hub<u64> = Hub::new();
        assert!(hub.is_empty());
        assert_eq!(hub.state(), None);
    }

    #[test]
    fn register_does_not_notify() {
        let mut hub: Hub<u64> = Hub::new();
        let recorder = RecordingObserver::new();
        hub.register(recorder.clone().shared());
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn set_state_stores_then_notifies() {
        let mut hub: Hub<u64> = Hub::new();
        let recorder = RecordingObserver::new();
        hub.register(recorder.clone().shared());

        hub.set_state(42).unwrap();

        assert_eq!(hub.state(), Some(&42));
        assert_eq!(recorder.snapshots(), vec![42]);
    }

    #[test]
    fn state_is_overwritten_wholesale() {
        let mut hub: Hub<u64> = Hub::new();
        hub.set_state(1).unwrap();
        hub.set_state(2).unwrap();
        assert_eq!(hub.state(), Some(&2));
    }

    #[test]
    fn duplicate_registration_notifies_twice_until_unregistered() {
        let mut hub: Hub<u64> = Hub::new();
        let recorder = RecordingObserver::new();
        let handle = recorder.clone().shared();

        hub.register(Arc::clone(&handle));
        hub.register(Arc::clone(&handle));
        hub.set_state(5).unwrap();
        assert_eq!(recorder.count(), 2);

        // unregister removes every occurrence
        hub.unregister(&handle);
        assert!(hub.is_empty());
        hub.set_state(6).unwrap();
        assert_eq!(recorder.count(), 2);
    }

    #[test]
    fn unregistering_an_unknown_observer_is_a_noop() {
        let mut hub: Hub<u64> = Hub::new();
        let registered = RecordingObserver::new();
        let stranger = RecordingObserver::new().shared();

        hub.register(registered.clone().shared());
        hub.unregister(&stranger);

        hub.set_state(9).unwrap();
        assert_eq!(registered.count(), 1);
    }

    #[test]
    fn notify_all_before_any_state_is_a_noop() {
        let mut hub: Hub<u64> = Hub::new();
        let recorder = RecordingObserver::new();
        hub.register(recorder.clone().shared());

        hub.notify_all().unwrap();
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn notify_all_redelivers_the_current_snapshot() {
        let mut hub: Hub<u64> = Hub::new();
        let recorder = RecordingObserver::new();
        hub.register(recorder.clone().shared());

        hub.set_state(3).unwrap();
        hub.notify_all().unwrap();
        assert_eq!(recorder.snapshots(), vec![3, 3]);
    }
}
