//! # Subject Capability
//!
//! A Subject owns a state snapshot and an ordered collection of observers,
//! and broadcasts the full snapshot to every observer whenever the state
//! changes. Registration order defines notification order.
//!
//! This trait is the contract consumed by observer-side code; the standard
//! implementation lives in `varsle-std`.

use crate::{error::NotifyError, observer::Observer, snapshot::Snapshot};
use std::sync::Arc;

/// An entity that owns state and notifies registered observers on change.
///
/// # Contract
///
/// - `register` appends; it never triggers a notification and never affects
///   observers that are already registered.
/// - `unregister` removes every occurrence of the observer, matched by `Arc`
///   allocation identity. Unregistering an observer that was never
///   registered is a no-op, not an error.
/// - `set_state` replaces the snapshot wholesale, then synchronously
///   notifies every currently registered observer in registration order,
///   passing each the full new snapshot, before returning.
pub trait Subject<S: Snapshot> {
    /// Appends `observer` to the ordered observer collection.
    fn register(&mut self, observer: Arc<dyn Observer<S>>);

    /// Removes all occurrences of `observer`, matched by allocation identity.
    fn unregister(&mut self, observer: &Arc<dyn Observer<S>>);

    /// Replaces the state snapshot and fans it out to all observers.
    fn set_state(&mut self, snapshot: S) -> Result<(), NotifyError>;
}
